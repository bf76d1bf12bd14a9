//! # Chart Geometry
//!
//! This module computes everything a chart needs *except* pixels. Each chart
//! type follows the pattern:
//!
//! - `*Chart` - Pre-computed geometry (JSON-serializable)
//! - `compute(...) -> *Chart` - Pure computation from a sample
//!
//! The GUI canvas only maps the numbers produced here onto the frame, the
//! same split the calculation results use for their diagrams.
//!
//! ## Available Charts
//!
//! - [`histogram`] - Frequency counts over equal-width bins
//! - [`bar_graph`] - One bar per sample index
//! - [`box_plot`] - Five-number summary with 1.5 IQR whiskers

pub mod bar_graph;
pub mod box_plot;
pub mod histogram;

use serde::{Deserialize, Serialize};

use crate::descriptive::Summary;
use crate::sample::Sample;

// Re-export commonly used types
pub use bar_graph::BarGraphChart;
pub use box_plot::BoxPlotChart;
pub use histogram::HistogramChart;

/// The three chart types offered by the chart selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Histogram,
    BarGraph,
    BoxPlot,
}

impl ChartKind {
    /// All chart kinds, in the order shown in the selector
    pub const ALL: [ChartKind; 3] = [ChartKind::Histogram, ChartKind::BarGraph, ChartKind::BoxPlot];

    /// Human-readable name shown in the selector and as the chart title
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::BarGraph => "Bar Graph",
            ChartKind::BoxPlot => "Box Plot",
        }
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Histogram
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Statistic marker values drawn over every chart.
///
/// The mode marker uses the primary (smallest) mode and is absent for
/// uniform samples, which report no mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
}

impl Markers {
    pub fn from_summary(summary: &Summary) -> Self {
        Markers {
            mean: summary.mean,
            median: summary.median,
            mode: summary.modes.primary(),
        }
    }
}

/// Enum wrapper for all chart types.
///
/// Allows the renderer and session settings to handle any chart through a
/// single type while keeping clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChartModel {
    Histogram(HistogramChart),
    BarGraph(BarGraphChart),
    BoxPlot(BoxPlotChart),
}

impl ChartModel {
    /// Compute the geometry for the requested chart kind with the default
    /// histogram bin count.
    pub fn build(kind: ChartKind, sample: &Sample, summary: &Summary) -> ChartModel {
        Self::build_with_bins(kind, sample, summary, histogram::DEFAULT_BINS)
    }

    /// Compute the geometry for the requested chart kind.
    ///
    /// `bins` only affects the histogram; sessions carry it in their
    /// settings.
    pub fn build_with_bins(
        kind: ChartKind,
        sample: &Sample,
        summary: &Summary,
        bins: usize,
    ) -> ChartModel {
        let markers = Markers::from_summary(summary);
        match kind {
            ChartKind::Histogram => {
                ChartModel::Histogram(histogram::compute(sample, bins, markers))
            }
            ChartKind::BarGraph => ChartModel::BarGraph(bar_graph::compute(sample, markers)),
            ChartKind::BoxPlot => ChartModel::BoxPlot(box_plot::compute(sample, markers)),
        }
    }

    /// Which chart kind this model renders as
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartModel::Histogram(_) => ChartKind::Histogram,
            ChartModel::BarGraph(_) => ChartKind::BarGraph,
            ChartModel::BoxPlot(_) => ChartKind::BoxPlot,
        }
    }

    /// The statistic markers carried by this chart
    pub fn markers(&self) -> Markers {
        match self {
            ChartModel::Histogram(c) => c.markers,
            ChartModel::BarGraph(c) => c.markers,
            ChartModel::BoxPlot(c) => c.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_and_summary(input: &str) -> (Sample, Summary) {
        let sample = Sample::parse(input).unwrap();
        let summary = Summary::compute(&sample);
        (sample, summary)
    }

    #[test]
    fn test_chart_kind_display() {
        assert_eq!(ChartKind::Histogram.to_string(), "Histogram");
        assert_eq!(ChartKind::BarGraph.to_string(), "Bar Graph");
        assert_eq!(ChartKind::BoxPlot.to_string(), "Box Plot");
    }

    #[test]
    fn test_default_chart_kind() {
        assert_eq!(ChartKind::default(), ChartKind::Histogram);
    }

    #[test]
    fn test_markers_from_summary() {
        let (_, summary) = sample_and_summary("1, 2, 2, 3");
        let markers = Markers::from_summary(&summary);
        assert_eq!(markers.mean, 2.0);
        assert_eq!(markers.median, 2.0);
        assert_eq!(markers.mode, Some(2.0));
    }

    #[test]
    fn test_markers_without_mode() {
        let (_, summary) = sample_and_summary("7, 7, 7");
        let markers = Markers::from_summary(&summary);
        assert_eq!(markers.mode, None);
    }

    #[test]
    fn test_build_matches_kind() {
        let (sample, summary) = sample_and_summary("1, 2, 3, 4");
        for kind in ChartKind::ALL {
            let model = ChartModel::build(kind, &sample, &summary);
            assert_eq!(model.kind(), kind);
        }
    }

    #[test]
    fn test_model_serialization() {
        let (sample, summary) = sample_and_summary("1, 2, 3");
        let model = ChartModel::build(ChartKind::BoxPlot, &sample, &summary);
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("BoxPlot"));
        let roundtrip: ChartModel = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.kind(), ChartKind::BoxPlot);
    }
}
