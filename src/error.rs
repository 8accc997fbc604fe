//! Error type for TailCor computations.
//!
//! Only structural problems are reported as errors. Numerical anomalies
//! (zero-IQR samples, `ksi = 0.5`, infinite quantiles) are not: they
//! propagate as IEEE `NaN`/`±inf` in the returned value.

use thiserror::Error;

/// Errors raised by [`iqr`](crate::robust::iqr),
/// [`tail_correlation`](crate::tail::tail_correlation) and friends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TailCorError {
    /// A probability level lies outside `[0, 1]` (or is NaN), so the
    /// percentile it selects does not exist.
    #[error("{name} = {value} is outside [0, 1]")]
    Domain {
        /// Parameter name (`"tau"` or `"ksi"`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Paired samples have different lengths.
    #[error("paired samples differ in length: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// Fewer than two observations.
    #[error("at least 2 observations are required, got {len}")]
    InsufficientData { len: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TailCorError>;

/// Checks that `value` is a valid percentile fraction.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TailCorError::Domain { name, value })
    }
}

/// Checks that a sample has at least two observations.
pub(crate) fn check_len(data: &[f64]) -> Result<()> {
    if data.len() < 2 {
        Err(TailCorError::InsufficientData { len: data.len() })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability() {
        assert!(check_probability("tau", 0.0).is_ok());
        assert!(check_probability("tau", 1.0).is_ok());
        assert_eq!(
            check_probability("ksi", 1.5),
            Err(TailCorError::Domain {
                name: "ksi",
                value: 1.5
            })
        );
        assert!(check_probability("ksi", f64::NAN).is_err());
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(&[1.0, 2.0]).is_ok());
        assert_eq!(
            check_len(&[1.0]),
            Err(TailCorError::InsufficientData { len: 1 })
        );
    }

    #[test]
    fn test_display() {
        let err = TailCorError::ShapeMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "paired samples differ in length: 3 vs 4");
        let err = TailCorError::Domain {
            name: "tau",
            value: -0.25,
        };
        assert_eq!(err.to_string(), "tau = -0.25 is outside [0, 1]");
    }
}
