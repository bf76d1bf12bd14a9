//! # Descriptive Statistics
//!
//! Computes the measures of central tendency (mean, median, mode) plus the
//! spread figures shown in the summary block (min, max, range, sample
//! variance and standard deviation).
//!
//! Mode follows multiplicity counting: every value attaining the maximal
//! multiplicity is a mode, and the result is classified as unimodal,
//! bimodal, or multimodal by how many there are. A sample where every value
//! is identical is reported as having no mode.
//!
//! ## Example
//!
//! ```rust
//! use stat_core::descriptive::{Modality, Summary};
//! use stat_core::sample::Sample;
//!
//! let sample = Sample::parse("1, 2, 2, 3, 4").unwrap();
//! let summary = Summary::compute(&sample);
//!
//! assert_eq!(summary.mean, 2.4);
//! assert_eq!(summary.median, 2.0);
//! assert_eq!(summary.modes.modality, Modality::Unimodal);
//! assert_eq!(summary.modes.values, vec![2.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// How many modes a sample has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// Every value is identical - no mode is reported
    Uniform,
    /// Exactly one mode
    Unimodal,
    /// Exactly two modes
    Bimodal,
    /// Three or more modes
    Multimodal,
}

/// The mode(s) of a sample.
///
/// `values` holds every value attaining the maximal multiplicity, sorted
/// ascending. For [`Modality::Uniform`] samples it is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modes {
    pub modality: Modality,
    pub values: Vec<f64>,
}

impl Modes {
    /// The primary mode: the smallest mode value, used for chart markers.
    ///
    /// `None` for uniform samples, which have no mode to mark.
    pub fn primary(&self) -> Option<f64> {
        match self.modality {
            Modality::Uniform => None,
            _ => self.values.first().copied(),
        }
    }
}

/// Full descriptive summary of a sample.
///
/// ## JSON Example
///
/// ```json
/// {
///   "count": 5,
///   "mean": 2.4,
///   "median": 2.0,
///   "modes": { "modality": "Unimodal", "values": [2.0] },
///   "min": 1.0,
///   "max": 4.0,
///   "range": 3.0,
///   "variance": 1.3,
///   "std_dev": 1.140175425099138
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values in the sample
    pub count: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Middle value of the sorted sample; even-length samples average the
    /// two middle values
    pub median: f64,

    /// Mode(s) and their classification
    pub modes: Modes,

    /// Smallest value
    pub min: f64,

    /// Largest value
    pub max: f64,

    /// max - min
    pub range: f64,

    /// Sample variance (n-1 denominator); `None` for samples of one
    pub variance: Option<f64>,

    /// Sample standard deviation; `None` for samples of one
    pub std_dev: Option<f64>,
}

impl Summary {
    /// Compute the full summary for a sample.
    ///
    /// Samples from [`Sample::parse`] are never empty, so every field is
    /// well-defined except the spread figures of a single-value sample.
    pub fn compute(sample: &Sample) -> Summary {
        let sorted = sample.sorted_values();
        let count = sorted.len();

        let mean = compute_mean(&sorted);
        let median = compute_median(&sorted);
        let modes = compute_modes(&sorted);

        let min = sorted[0];
        let max = sorted[count - 1];

        let variance = compute_variance(&sorted, mean);
        let std_dev = variance.map(f64::sqrt);

        Summary {
            count,
            mean,
            median,
            modes,
            min,
            max,
            range: max - min,
            variance,
            std_dev,
        }
    }

    /// The "Mean = ..." label text, mean shown to three decimals.
    pub fn mean_label(&self) -> String {
        format!("Mean = {:.3}", self.mean)
    }

    /// The "Median = ..." label text.
    pub fn median_label(&self) -> String {
        format!("Median = {}", self.median)
    }

    /// The mode label text: "No mode" for uniform samples, otherwise the
    /// classification followed by the mode values.
    pub fn mode_label(&self) -> String {
        let name = match self.modes.modality {
            Modality::Uniform => return "No mode".to_string(),
            Modality::Unimodal => "Unimodal",
            Modality::Bimodal => "Bimodal",
            Modality::Multimodal => "Multimodal",
        };
        let values = self
            .modes
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", name, values)
    }
}

/// The three output labels shown when parsing fails.
pub fn invalid_input_labels() -> (String, String, String) {
    (
        "Mean = Invalid input".to_string(),
        "Median = Invalid input".to_string(),
        "Mode = Invalid input".to_string(),
    )
}

fn compute_mean(sorted: &[f64]) -> f64 {
    sorted.iter().sum::<f64>() / sorted.len() as f64
}

fn compute_median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Count multiplicities over the sorted sample and collect every value
/// attaining the maximum.
fn compute_modes(sorted: &[f64]) -> Modes {
    // Runs of equal values in a sorted slice are the multiplicity groups
    let mut groups: Vec<(f64, usize)> = Vec::new();
    for &value in sorted {
        match groups.last_mut() {
            Some((v, count)) if *v == value => *count += 1,
            _ => groups.push((value, 1)),
        }
    }

    if groups.len() == 1 {
        // Single distinct value: reported as "No mode"
        return Modes {
            modality: Modality::Uniform,
            values: Vec::new(),
        };
    }

    let max_count = groups.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let values: Vec<f64> = groups
        .iter()
        .filter(|&&(_, c)| c == max_count)
        .map(|&(v, _)| v)
        .collect();

    let modality = match values.len() {
        1 => Modality::Unimodal,
        2 => Modality::Bimodal,
        _ => Modality::Multimodal,
    };

    Modes { modality, values }
}

fn compute_variance(sorted: &[f64], mean: f64) -> Option<f64> {
    let n = sorted.len();
    if n < 2 {
        return None;
    }
    let sum_sq: f64 = sorted.iter().map(|&v| (v - mean).powi(2)).sum();
    Some(sum_sq / (n - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_of(input: &str) -> Summary {
        Summary::compute(&Sample::parse(input).unwrap())
    }

    #[test]
    fn test_mean() {
        let summary = summary_of("1, 2, 3, 4");
        assert!((summary.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_median_odd() {
        let summary = summary_of("7, 1, 3");
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn test_median_even() {
        let summary = summary_of("4, 1, 3, 2");
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn test_unimodal() {
        let summary = summary_of("1, 2, 2, 3");
        assert_eq!(summary.modes.modality, Modality::Unimodal);
        assert_eq!(summary.modes.values, vec![2.0]);
        assert_eq!(summary.mode_label(), "Unimodal: 2");
    }

    #[test]
    fn test_bimodal() {
        let summary = summary_of("1, 1, 2, 4.5, 4.5");
        assert_eq!(summary.modes.modality, Modality::Bimodal);
        assert_eq!(summary.modes.values, vec![1.0, 4.5]);
        assert_eq!(summary.mode_label(), "Bimodal: 1, 4.5");
    }

    #[test]
    fn test_multimodal_all_distinct() {
        // Every value occurs once, so every value is a mode
        let summary = summary_of("1, 2, 3");
        assert_eq!(summary.modes.modality, Modality::Multimodal);
        assert_eq!(summary.modes.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_uniform_has_no_mode() {
        let summary = summary_of("5, 5, 5");
        assert_eq!(summary.modes.modality, Modality::Uniform);
        assert!(summary.modes.values.is_empty());
        assert_eq!(summary.mode_label(), "No mode");
        assert_eq!(summary.modes.primary(), None);
    }

    #[test]
    fn test_single_value_has_no_mode() {
        let summary = summary_of("42");
        assert_eq!(summary.modes.modality, Modality::Uniform);
    }

    #[test]
    fn test_primary_mode_is_smallest() {
        let summary = summary_of("9, 9, 2, 2, 5");
        assert_eq!(summary.modes.primary(), Some(2.0));
    }

    #[test]
    fn test_spread_figures() {
        let summary = summary_of("2, 4, 4, 4, 5, 5, 7, 9");
        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.range, 7.0);
        // Known sample variance of this classic data set: 32/7
        assert!((summary.variance.unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert!((summary.std_dev.unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_spread_is_none() {
        let summary = summary_of("3");
        assert_eq!(summary.variance, None);
        assert_eq!(summary.std_dev, None);
    }

    #[test]
    fn test_mean_label_three_decimals() {
        let summary = summary_of("1, 2");
        assert_eq!(summary.mean_label(), "Mean = 1.500");
    }

    #[test]
    fn test_median_label() {
        let summary = summary_of("1, 2, 3");
        assert_eq!(summary.median_label(), "Median = 2");
    }

    #[test]
    fn test_invalid_input_labels() {
        let (mean, median, mode) = invalid_input_labels();
        assert_eq!(mean, "Mean = Invalid input");
        assert_eq!(median, "Median = Invalid input");
        assert_eq!(mode, "Mode = Invalid input");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = summary_of("1, 2, 2");
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("Unimodal"));
        let roundtrip: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
