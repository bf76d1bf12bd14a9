//! # Sample Parsing
//!
//! A [`Sample`] is the only data entity in Centrum: a flat, unordered
//! sequence of real numbers parsed from a comma-separated string at the
//! moment the user triggers a computation. It has no identity and no
//! lifecycle beyond that computation; sessions store the raw text and
//! re-parse it on every interaction.
//!
//! ## Example
//!
//! ```rust
//! use stat_core::sample::Sample;
//!
//! let sample = Sample::parse("4, 2, 7.5, 2").unwrap();
//! assert_eq!(sample.len(), 4);
//! assert_eq!(sample.min(), Some(2.0));
//! assert_eq!(sample.max(), Some(7.5));
//!
//! assert!(Sample::parse("4, two, 7").is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StatError, StatResult};

/// A parsed numeric sample.
///
/// Values are kept in input order; statistics that need ordering sort a
/// working copy internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Parse a comma-separated list of numbers.
    ///
    /// Each token is trimmed and parsed as `f64`. Tokens that fail to parse,
    /// or parse to a non-finite value (`NaN`, `inf`), produce
    /// [`StatError::InvalidNumber`] carrying the offending token. Input with
    /// no tokens at all produces [`StatError::EmptySample`].
    ///
    /// Note that an empty token between commas (`"1,,2"` or a trailing
    /// comma) is an invalid number, not silently skipped.
    pub fn parse(input: &str) -> StatResult<Self> {
        if input.trim().is_empty() {
            return Err(StatError::EmptySample);
        }

        let mut values = Vec::new();
        for token in input.split(',') {
            let token = token.trim();
            let value: f64 = token
                .parse()
                .map_err(|_| StatError::invalid_number(token))?;
            if !value.is_finite() {
                return Err(StatError::invalid_number(token));
            }
            values.push(value);
        }

        Ok(Sample { values })
    }

    /// Construct directly from values, rejecting non-finite entries.
    pub fn from_values(values: Vec<f64>) -> StatResult<Self> {
        if values.is_empty() {
            return Err(StatError::EmptySample);
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatError::invalid_number(bad.to_string()));
        }
        Ok(Sample { values })
    }

    /// The parsed values, in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the sample.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the sample holds no values.
    ///
    /// `parse` and `from_values` never return an empty sample; this exists
    /// for completeness of the container API.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value in the sample.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest value in the sample.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// A copy of the values sorted ascending.
    pub fn sorted_values(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let sample = Sample::parse("1,2,3").unwrap();
        assert_eq!(sample.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_whitespace_and_floats() {
        let sample = Sample::parse(" 1.5 ,  -2 , 3.25 ").unwrap();
        assert_eq!(sample.values(), &[1.5, -2.0, 3.25]);
    }

    #[test]
    fn test_parse_single_value() {
        let sample = Sample::parse("42").unwrap();
        assert_eq!(sample.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = Sample::parse("1, two, 3").unwrap_err();
        assert_eq!(err, StatError::invalid_number("two"));
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        // Trailing comma behaves like the empty string fed to a float parser
        assert!(Sample::parse("1,2,").is_err());
        assert!(Sample::parse("1,,2").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(Sample::parse("").unwrap_err(), StatError::EmptySample);
        assert_eq!(Sample::parse("   ").unwrap_err(), StatError::EmptySample);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Sample::parse("1, NaN, 3").is_err());
        assert!(Sample::parse("inf").is_err());
    }

    #[test]
    fn test_min_max() {
        let sample = Sample::parse("5, -1, 3").unwrap();
        assert_eq!(sample.min(), Some(-1.0));
        assert_eq!(sample.max(), Some(5.0));
    }

    #[test]
    fn test_sorted_values() {
        let sample = Sample::parse("3, 1, 2").unwrap();
        assert_eq!(sample.sorted_values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_values_rejects_nan() {
        assert!(Sample::from_values(vec![1.0, f64::NAN]).is_err());
        assert!(Sample::from_values(vec![]).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sample = Sample::parse("1, 2.5, 3").unwrap();
        let json = serde_json::to_string(&sample).unwrap();
        let roundtrip: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, roundtrip);
    }
}
