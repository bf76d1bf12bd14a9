//! # Session Data Structures
//!
//! The `Session` struct is the root container for saved work. Sessions
//! serialize to `.cts` (Centrum session) files as human-readable JSON.
//!
//! Datasets store the raw comma-separated text exactly as typed, never the
//! parsed numbers: values are re-parsed on every interaction, so a saved
//! dataset behaves identically to freshly typed input.
//!
//! ## Structure
//!
//! ```text
//! Session
//! ├── meta: SessionMetadata (version, analyst, title, timestamps)
//! ├── settings: SessionSettings (default chart, histogram bins)
//! └── datasets: HashMap<Uuid, Dataset> (saved input strings)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stat_core::session::Session;
//!
//! let mut session = Session::new("Jane Analyst", "Heights survey");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&session).unwrap();
//! assert!(json.contains("Heights survey"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::charts::ChartKind;
use crate::charts::histogram::DEFAULT_BINS;

/// Current schema version for .cts files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root session container.
///
/// This is the top-level struct that gets serialized to `.cts` files.
/// Datasets are stored in a flat UUID-keyed map for O(1) lookups and
/// stable references when the list is reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session metadata (version, analyst, title, timestamps)
    pub meta: SessionMetadata,

    /// Session settings (default chart type, histogram bins)
    pub settings: SessionSettings,

    /// All saved datasets, keyed by UUID
    pub datasets: HashMap<Uuid, Dataset>,
}

impl Session {
    /// Create a new empty session.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stat_core::session::Session;
    ///
    /// let session = Session::new("John Doe", "Exam scores");
    /// assert_eq!(session.meta.analyst, "John Doe");
    /// ```
    pub fn new(analyst: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Session {
            meta: SessionMetadata {
                version: SCHEMA_VERSION.to_string(),
                analyst: analyst.into(),
                title: title.into(),
                created: now,
                modified: now,
            },
            settings: SessionSettings::default(),
            datasets: HashMap::new(),
        }
    }

    /// Add a dataset to the session.
    ///
    /// Returns the UUID assigned to the dataset.
    pub fn add_dataset(&mut self, dataset: Dataset) -> Uuid {
        let id = Uuid::new_v4();
        self.datasets.insert(id, dataset);
        self.touch();
        id
    }

    /// Remove a dataset by UUID.
    ///
    /// Returns the removed dataset if it existed.
    pub fn remove_dataset(&mut self, id: &Uuid) -> Option<Dataset> {
        let dataset = self.datasets.remove(id);
        if dataset.is_some() {
            self.touch();
        }
        dataset
    }

    /// Get a dataset by UUID.
    pub fn get_dataset(&self, id: &Uuid) -> Option<&Dataset> {
        self.datasets.get(id)
    }

    /// Number of saved datasets.
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Saved datasets sorted by label for stable sidebar display.
    pub fn datasets_sorted(&self) -> Vec<(Uuid, &Dataset)> {
        let mut list: Vec<(Uuid, &Dataset)> =
            self.datasets.iter().map(|(id, d)| (*id, d)).collect();
        list.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        list
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new("", "")
    }
}

/// Session metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person running the analysis
    pub analyst: String,

    /// Session title (e.g., "Heights survey")
    pub title: String,

    /// When the session was created
    pub created: DateTime<Utc>,

    /// When the session was last modified
    pub modified: DateTime<Utc>,
}

/// Per-session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Chart type selected when a dataset is first shown
    pub default_chart: ChartKind,

    /// Histogram bin count
    pub histogram_bins: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            default_chart: ChartKind::Histogram,
            histogram_bins: DEFAULT_BINS,
        }
    }
}

/// A saved dataset: a label and the raw comma-separated input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// User label (e.g., "Trial 3", "Class A scores")
    pub label: String,

    /// The comma-separated input exactly as typed
    pub raw: String,
}

impl Dataset {
    pub fn new(label: impl Into<String>, raw: impl Into<String>) -> Self {
        Dataset {
            label: label.into(),
            raw: raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = Session::new("John Doe", "Exam scores");
        assert_eq!(session.meta.analyst, "John Doe");
        assert_eq!(session.meta.title, "Exam scores");
        assert_eq!(session.meta.version, SCHEMA_VERSION);
        assert_eq!(session.dataset_count(), 0);
    }

    #[test]
    fn test_session_serialization() {
        let session = Session::new("Jane Analyst", "Survey");
        let json = serde_json::to_string_pretty(&session).unwrap();

        assert!(json.contains("Jane Analyst"));
        assert!(json.contains("Histogram"));

        let roundtrip: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.analyst, "Jane Analyst");
        assert_eq!(roundtrip.settings.histogram_bins, 10);
    }

    #[test]
    fn test_add_remove_dataset() {
        let mut session = Session::new("Analyst", "Title");

        let id = session.add_dataset(Dataset::new("Trial 1", "1, 2, 3"));
        assert_eq!(session.dataset_count(), 1);
        assert_eq!(session.get_dataset(&id).unwrap().raw, "1, 2, 3");

        let removed = session.remove_dataset(&id);
        assert!(removed.is_some());
        assert_eq!(session.dataset_count(), 0);
    }

    #[test]
    fn test_datasets_sorted_by_label() {
        let mut session = Session::new("", "");
        session.add_dataset(Dataset::new("b", "2"));
        session.add_dataset(Dataset::new("a", "1"));
        session.add_dataset(Dataset::new("c", "3"));

        let labels: Vec<&str> = session
            .datasets_sorted()
            .iter()
            .map(|(_, d)| d.label.as_str())
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut session = Session::new("", "");
        let before = session.meta.modified;
        session.add_dataset(Dataset::new("x", "1"));
        assert!(session.meta.modified >= before);
    }
}
