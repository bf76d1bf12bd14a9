//! # Bar Graph Geometry
//!
//! One bar per sample index, the value as bar height. Bars rise from the
//! zero baseline; negative values extend below it. The value axis is
//! vertical here, so the statistic markers are drawn at their value on
//! that axis.

use serde::{Deserialize, Serialize};

use super::Markers;
use crate::sample::Sample;

/// Pre-computed bar graph geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraphChart {
    /// Bar heights, one per sample index in input order
    pub values: Vec<f64>,

    /// Bottom of the value axis (zero, or the most negative value)
    pub value_min: f64,

    /// Top of the value axis (zero, or the largest value)
    pub value_max: f64,

    /// Statistic marker values on the value (y) axis
    pub markers: Markers,
}

impl BarGraphChart {
    /// Number of bars
    pub fn bar_count(&self) -> usize {
        self.values.len()
    }
}

/// Build the bar graph for a sample.
///
/// The axis range always includes zero so every bar has a baseline to
/// grow from.
pub fn compute(sample: &Sample, markers: Markers) -> BarGraphChart {
    let min = sample.min().unwrap_or(0.0);
    let max = sample.max().unwrap_or(0.0);

    BarGraphChart {
        values: sample.values().to_vec(),
        value_min: min.min(0.0),
        value_max: max.max(0.0),
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
    fn test_one_bar_per_value_in_order() {
        let sample = Sample::parse("3, 1, 2").unwrap();
        let chart = compute(&sample, markers());
        assert_eq!(chart.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(chart.bar_count(), 3);
    }

    #[test]
    fn test_axis_includes_zero_for_positive_data() {
        let sample = Sample::parse("2, 5").unwrap();
        let chart = compute(&sample, markers());
        assert_eq!(chart.value_min, 0.0);
        assert_eq!(chart.value_max, 5.0);
    }

    #[test]
    fn test_negative_values_extend_axis_down() {
        let sample = Sample::parse("-3, 4").unwrap();
        let chart = compute(&sample, markers());
        assert_eq!(chart.value_min, -3.0);
        assert_eq!(chart.value_max, 4.0);
    }

    #[test]
    fn test_all_negative_keeps_zero_top() {
        let sample = Sample::parse("-3, -1").unwrap();
        let chart = compute(&sample, markers());
        assert_eq!(chart.value_min, -3.0);
        assert_eq!(chart.value_max, 0.0);
    }
}
