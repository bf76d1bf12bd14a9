//! UI module for the Centrum GUI
//!
//! This module organizes the GUI into panels and components.
//!
//! # Panel Structure
//! - `toolbar` - File operations (New, Open, Save, Save As), Settings
//! - `items_panel` - Left sidebar: Session Info, saved Datasets list
//! - `input_panel` - Center panel: dispatches to input_* child modules
//! - `results_panel` - Right panel: chart selector, canvas, summary
//! - `status_bar` - Bottom status messages
//!
//! # Input Panel Children
//! - `input_session_info` - Analyst and Title fields
//! - `input_data_entry` - Comma-separated data entry, CALCULATE / RESET,
//!   the three statistic labels
//!
//! # Shared Components
//! - `shared/charts` - Canvas drawing for histogram / bar graph / box plot

// Top-level panels
pub mod toolbar;
pub mod items_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

// Input panel children
pub mod input_session_info;
pub mod input_data_entry;

// Modal dialogs
pub mod modal;

// Shared components
pub mod shared;

// Note: Functions are accessed via module paths (e.g., ui::toolbar::view_toolbar)
