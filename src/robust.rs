//! Robust scale and standardization.
//!
//! The scale estimator is the generalized interquartile range
//! `Q(tau) − Q(1 − tau)`, where `Q` is the R-7 sample quantile. With the
//! default `tau = 0.75` this is the ordinary IQR.
//!
//! Robust standardization centers a sample on its median and divides by
//! its IQR, so a handful of outliers cannot move either the location or
//! the scale much.

use tracing::debug;

use crate::error::{check_len, check_probability, Result};
use crate::stats::{quantile_sorted, sorted_copy};

/// Default percentile width: `0.75` selects the 25th and 75th percentiles.
pub const DEFAULT_TAU: f64 = 0.75;

/// Computes the interquartile range `Q(tau) − Q(1 − tau)` of `data`.
///
/// Quantiles use R-7 linear interpolation between order statistics.
/// `tau` below `0.5` is accepted and yields a non-positive range.
///
/// # Errors
/// - [`InsufficientData`](crate::TailCorError::InsufficientData) if
///   `data.len() < 2`.
/// - [`Domain`](crate::TailCorError::Domain) if `tau` is outside `[0, 1]`.
///
/// A NaN anywhere in `data` makes the result NaN.
///
/// # Examples
/// ```
/// use u_tailcor::robust::{iqr, DEFAULT_TAU};
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert_eq!(iqr(&data, DEFAULT_TAU).unwrap(), 4.5);
/// ```
pub fn iqr(data: &[f64], tau: f64) -> Result<f64> {
    check_len(data)?;
    check_probability("tau", tau)?;
    if data.iter().any(|x| x.is_nan()) {
        debug!(len = data.len(), "NaN in sample, IQR is undefined");
        return Ok(f64::NAN);
    }
    Ok(iqr_sorted(&sorted_copy(data), tau))
}

// `sorted` is non-empty and `tau` is in [0, 1].
fn iqr_sorted(sorted: &[f64], tau: f64) -> f64 {
    let hi = quantile_sorted(sorted, tau).unwrap_or(f64::NAN);
    let lo = quantile_sorted(sorted, 1.0 - tau).unwrap_or(f64::NAN);
    hi - lo
}

/// Median/IQR pair used to standardize a sample.
///
/// # Examples
/// ```
/// use u_tailcor::robust::RobustStandardization;
/// let fit = RobustStandardization::fit(&[1.0, 2.0, 3.0, 4.0, 100.0], 0.75).unwrap();
/// assert_eq!(fit.center, 3.0);
/// assert_eq!(fit.scale, 2.0);
/// assert_eq!(fit.apply(&[5.0]), vec![1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobustStandardization {
    /// Sample median.
    pub center: f64,
    /// Sample IQR at the fitted `tau`.
    pub scale: f64,
}

impl RobustStandardization {
    /// Estimates the median and `tau`-IQR of `data`.
    ///
    /// Sorts once and reads all three quantiles from the sorted copy.
    ///
    /// # Errors
    /// Same conditions as [`iqr`].
    pub fn fit(data: &[f64], tau: f64) -> Result<Self> {
        check_len(data)?;
        check_probability("tau", tau)?;
        if data.iter().any(|x| x.is_nan()) {
            debug!(len = data.len(), "NaN in sample, standardization is undefined");
            return Ok(Self {
                center: f64::NAN,
                scale: f64::NAN,
            });
        }
        let sorted = sorted_copy(data);
        let center = quantile_sorted(&sorted, 0.5).unwrap_or(f64::NAN);
        Ok(Self {
            center,
            scale: iqr_sorted(&sorted, tau),
        })
    }

    /// Maps each value to `(x − center) / scale`.
    ///
    /// A zero scale is not guarded: values off the median become `±inf`
    /// and values on it become NaN.
    pub fn apply(&self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&x| (x - self.center) / self.scale).collect()
    }

    /// Returns `true` if [`apply`](Self::apply) cannot produce finite values.
    pub fn is_degenerate(&self) -> bool {
        !(self.center.is_finite() && self.scale.is_finite() && self.scale != 0.0)
    }
}

/// Standardizes `data` by its median and `tau`-IQR.
///
/// Shorthand for `RobustStandardization::fit(data, tau)?.apply(data)`.
///
/// # Examples
/// ```
/// use u_tailcor::robust::standardize;
/// let y = standardize(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.75).unwrap();
/// assert_eq!(y, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn standardize(data: &[f64], tau: f64) -> Result<Vec<f64>> {
    Ok(RobustStandardization::fit(data, tau)?.apply(data))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e3_f64..1e3, 2..=100)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn iqr_affine_equivariant(
            data in sample(),
            a in 0.1_f64..100.0,
            b in -1e3_f64..1e3,
            tau in 0.5_f64..1.0,
        ) {
            let base = iqr(&data, tau).unwrap();
            let moved: Vec<f64> = data.iter().map(|&x| a * x + b).collect();
            let scaled = iqr(&moved, tau).unwrap();
            let tol = 1e-9 * (a * 1e3 + b.abs());
            prop_assert!(
                (scaled - a * base).abs() <= tol,
                "iqr(aX+b)={} != a*iqr(X)={}", scaled, a * base
            );
        }

        #[test]
        fn iqr_negation_invariant(data in sample(), tau in 0.5_f64..1.0) {
            let neg: Vec<f64> = data.iter().map(|x| -x).collect();
            let lhs = iqr(&neg, tau).unwrap();
            let rhs = iqr(&data, tau).unwrap();
            prop_assert!((lhs - rhs).abs() <= 1e-9, "iqr(-X)={} != iqr(X)={}", lhs, rhs);
        }

        #[test]
        fn iqr_non_negative_above_half(data in sample(), tau in 0.55_f64..=1.0) {
            prop_assert!(iqr(&data, tau).unwrap() >= 0.0);
        }

        #[test]
        fn standardized_sample_has_unit_iqr(data in sample(), tau in 0.6_f64..0.95) {
            let fit = RobustStandardization::fit(&data, tau).unwrap();
            prop_assume!(fit.scale > 1.0);
            let y = fit.apply(&data);
            let unit = iqr(&y, tau).unwrap();
            prop_assert!((unit - 1.0).abs() < 1e-9, "iqr of standardized sample = {}", unit);
        }
    }
}
