//! # Histogram Geometry
//!
//! Frequency counts over equal-width bins spanning [min, max]. Bins are
//! right-open except the last, which is closed so the maximum lands in it.
//! A sample where every value is equal has zero width; the range is widened
//! by half a unit on each side so the values still fall into one bin.
//!
//! ## Example
//!
//! ```rust
//! use stat_core::charts::{histogram, Markers};
//! use stat_core::sample::Sample;
//!
//! let sample = Sample::parse("1, 2, 2, 9").unwrap();
//! let markers = Markers { mean: 3.5, median: 2.0, mode: Some(2.0) };
//! let chart = histogram::compute(&sample, histogram::DEFAULT_BINS, markers);
//!
//! assert_eq!(chart.counts.len(), 10);
//! assert_eq!(chart.counts.iter().sum::<usize>(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::Markers;
use crate::sample::Sample;

/// Default bin count for the histogram view
pub const DEFAULT_BINS: usize = 10;

/// Pre-computed histogram geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    /// Bin boundaries, `counts.len() + 1` entries, ascending
    pub edges: Vec<f64>,

    /// Number of sample values per bin
    pub counts: Vec<usize>,

    /// Largest bin count (vertical scale of the plot)
    pub max_count: usize,

    /// Statistic marker values on the value (x) axis
    pub markers: Markers,
}

impl HistogramChart {
    /// The value-axis extent of the plot
    pub fn value_range(&self) -> (f64, f64) {
        (self.edges[0], self.edges[self.edges.len() - 1])
    }
}

/// Bin a sample into `bins` equal-width bins.
///
/// `bins` must be at least 1; callers pass [`DEFAULT_BINS`] unless the
/// session settings override it.
pub fn compute(sample: &Sample, bins: usize, markers: Markers) -> HistogramChart {
    let bins = bins.max(1);
    let min = sample.min().unwrap_or(0.0);
    let max = sample.max().unwrap_or(0.0);

    // Degenerate range: widen so a single distinct value still bins
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];

    for &value in sample.values() {
        let index = ((value - lo) / width) as usize;
        // The maximum value computes to `bins`; fold it into the last bin
        let index = index.min(bins - 1);
        counts[index] += 1;
    }

    let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
    let max_count = counts.iter().copied().max().unwrap_or(0);

    HistogramChart {
        edges,
        counts,
        max_count,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers {
            mean: 0.0,
            median: 0.0,
            mode: None,
        }
    }

    #[test]
    fn test_counts_sum_to_sample_size() {
        let sample = Sample::parse("1, 2, 3, 4, 5, 6, 7, 8, 9, 10").unwrap();
        let chart = compute(&sample, DEFAULT_BINS, markers());
        assert_eq!(chart.counts.iter().sum::<usize>(), 10);
        assert_eq!(chart.edges.len(), 11);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let sample = Sample::parse("0, 10").unwrap();
        let chart = compute(&sample, 10, markers());
        assert_eq!(chart.counts[9], 1);
        assert_eq!(chart.counts[0], 1);
    }

    #[test]
    fn test_interior_edge_goes_right() {
        // Bins over [0, 10] with width 1: the value 3 sits on an edge and
        // belongs to the right-open bin [3, 4)
        let sample = Sample::parse("0, 3, 10").unwrap();
        let chart = compute(&sample, 10, markers());
        assert_eq!(chart.counts[3], 1);
    }

    #[test]
    fn test_equal_values_widen_range() {
        let sample = Sample::parse("5, 5, 5").unwrap();
        let chart = compute(&sample, 10, markers());
        assert_eq!(chart.counts.iter().sum::<usize>(), 3);
        let (lo, hi) = chart.value_range();
        assert!((lo - 4.5).abs() < 1e-12);
        assert!((hi - 5.5).abs() < 1e-12);
        assert_eq!(chart.max_count, 3);
    }

    #[test]
    fn test_zero_bins_clamped() {
        let sample = Sample::parse("1, 2").unwrap();
        let chart = compute(&sample, 0, markers());
        assert_eq!(chart.counts.len(), 1);
        assert_eq!(chart.counts[0], 2);
    }

    #[test]
    fn test_max_count() {
        let sample = Sample::parse("1, 1, 1, 9").unwrap();
        let chart = compute(&sample, 2, markers());
        assert_eq!(chart.max_count, 3);
    }
}
