//! # Box Plot Geometry
//!
//! Five-number summary with Tukey whiskers: the box spans Q1..Q3 with a
//! line at the median, whiskers reach the most extreme data points within
//! 1.5 IQR of the box, and anything beyond the whiskers is an outlier.
//! Quartiles interpolate linearly between order statistics.
//!
//! ## Example
//!
//! ```rust
//! use stat_core::charts::{box_plot, Markers};
//! use stat_core::sample::Sample;
//!
//! let sample = Sample::parse("1, 2, 3, 4, 100").unwrap();
//! let markers = Markers { mean: 22.0, median: 3.0, mode: None };
//! let chart = box_plot::compute(&sample, markers);
//!
//! assert_eq!(chart.median, 3.0);
//! assert_eq!(chart.outliers, vec![100.0]);
//! assert_eq!(chart.whisker_high, 4.0);
//! ```

use serde::{Deserialize, Serialize};

use super::Markers;
use crate::sample::Sample;

/// Pre-computed box plot geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotChart {
    /// First quartile (box bottom)
    pub q1: f64,

    /// Median (line inside the box)
    pub median: f64,

    /// Third quartile (box top)
    pub q3: f64,

    /// Lowest datum within 1.5 IQR below Q1
    pub whisker_low: f64,

    /// Highest datum within 1.5 IQR above Q3
    pub whisker_high: f64,

    /// Values beyond the whiskers, ascending
    pub outliers: Vec<f64>,

    /// Statistic marker values on the value (y) axis
    pub markers: Markers,
}

impl BoxPlotChart {
    /// Interquartile range Q3 - Q1
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The value-axis extent of the plot, outliers included
    pub fn value_range(&self) -> (f64, f64) {
        let lo = self
            .outliers
            .first()
            .copied()
            .unwrap_or(self.whisker_low)
            .min(self.whisker_low);
        let hi = self
            .outliers
            .last()
            .copied()
            .unwrap_or(self.whisker_high)
            .max(self.whisker_high);
        (lo, hi)
    }
}

/// Build the box plot for a sample.
pub fn compute(sample: &Sample, markers: Markers) -> BoxPlotChart {
    let sorted = sample.sorted_values();

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;

    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    // Whiskers clamp to actual data points inside the fences
    let whisker_low = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let whisker_high = sorted
        .iter()
        .copied()
        .rev()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);

    let outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v < whisker_low || v > whisker_high)
        .collect();

    BoxPlotChart {
        q1,
        median,
        q3,
        whisker_low,
        whisker_high,
        outliers,
        markers,
    }
}

/// Linear-interpolation quantile over a sorted slice.
///
/// The quantile position is `p * (n - 1)`; fractional positions blend the
/// two surrounding order statistics.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let position = p * (n - 1) as f64;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;
    if lower + 1 < n {
        sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
    } else {
        sorted[n - 1]
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

    fn chart_of(input: &str) -> BoxPlotChart {
        compute(&Sample::parse(input).unwrap(), markers())
    }

    #[test]
    fn test_quartiles_interpolate() {
        let chart = chart_of("1, 2, 3, 4");
        assert!((chart.q1 - 1.75).abs() < 1e-12);
        assert_eq!(chart.median, 2.5);
        assert!((chart.q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_quartiles_exact_positions() {
        let chart = chart_of("1, 2, 3, 4, 5");
        assert_eq!(chart.q1, 2.0);
        assert_eq!(chart.median, 3.0);
        assert_eq!(chart.q3, 4.0);
        assert_eq!(chart.iqr(), 2.0);
    }

    #[test]
    fn test_no_outliers_whiskers_at_extremes() {
        let chart = chart_of("1, 2, 3, 4, 5");
        assert_eq!(chart.whisker_low, 1.0);
        assert_eq!(chart.whisker_high, 5.0);
        assert!(chart.outliers.is_empty());
    }

    #[test]
    fn test_high_outlier() {
        let chart = chart_of("1, 2, 3, 4, 100");
        // Q1 = 2, Q3 = 4, IQR = 2, high fence = 7
        assert_eq!(chart.whisker_high, 4.0);
        assert_eq!(chart.outliers, vec![100.0]);
    }

    #[test]
    fn test_low_outlier() {
        let chart = chart_of("-100, 10, 11, 12, 13");
        assert_eq!(chart.whisker_low, 10.0);
        assert_eq!(chart.outliers, vec![-100.0]);
    }

    #[test]
    fn test_single_value() {
        let chart = chart_of("7");
        assert_eq!(chart.q1, 7.0);
        assert_eq!(chart.median, 7.0);
        assert_eq!(chart.q3, 7.0);
        assert_eq!(chart.whisker_low, 7.0);
        assert_eq!(chart.whisker_high, 7.0);
        assert!(chart.outliers.is_empty());
    }

    #[test]
    fn test_value_range_covers_outliers() {
        let chart = chart_of("1, 2, 3, 4, 100");
        let (lo, hi) = chart.value_range();
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 100.0);
    }
}
