//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `charts` - Canvas drawing utilities for the statistics charts

pub mod charts;

// Re-exports accessed via shared::charts::StatChart
