//! The TailCor tail-dependence statistic.
//!
//! # Definition
//!
//! For paired samples `X1`, `X2`, a tail level `ksi` and a standardization
//! width `tau`:
//!
//! ```text
//! Yᵢ   = (Xᵢ − median(Xᵢ)) / IQR_tau(Xᵢ)
//! s    = sign(Cov(Y1, Y2))                  ∈ {−1, 0, +1}
//! Z    = (Y1 + s·Y2) / √2
//! TailCor = [Φ⁻¹(0.75) / Φ⁻¹(ksi)] · IQR_ksi(Z)
//! ```
//!
//! The robust standardization removes location and scale. `Z` follows the
//! dominant co-movement direction of the pair, and its spread at `ksi`
//! measures how strongly the two series move together in the tails. The
//! normal-quantile ratio calibrates the tail spread against the central
//! (`0.75`) spread, so values for different `ksi` are comparable; for two
//! independent Gaussian samples the statistic is close to 1, and for
//! perfectly dependent ones it approaches √2.

use std::f64::consts::FRAC_1_SQRT_2;

use tracing::{debug, trace};

use crate::error::{check_len, check_probability, Result, TailCorError};
use crate::robust::{RobustStandardization, DEFAULT_TAU};
use crate::special::inverse_normal_cdf;
use crate::stats::{covariance, quantile_sorted, sorted_copy};

/// Computes the tail scale factor `Φ⁻¹(tau) / Φ⁻¹(ksi)`.
///
/// No validation is performed. IEEE special values propagate:
/// - `ksi == 0.5` divides by zero (`±inf`, or NaN when `tau == 0.5` too),
/// - `ksi` or `tau` equal to 0 or 1 yields infinite quantiles,
/// - values outside `[0, 1]` yield NaN.
///
/// `scale_factor(t, t)` is exactly `1.0` whenever `Φ⁻¹(t)` is finite and
/// nonzero.
///
/// # Examples
/// ```
/// use u_tailcor::tail::scale_factor;
/// assert_eq!(scale_factor(0.75, 0.75), 1.0);
/// assert!((scale_factor(0.95, 0.75) - 0.41006065168617056).abs() < 1e-14);
/// assert!(scale_factor(0.5, 0.75).is_infinite());
/// ```
pub fn scale_factor(ksi: f64, tau: f64) -> f64 {
    inverse_normal_cdf(tau) / inverse_normal_cdf(ksi)
}

/// Intermediate values of one TailCor evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TailCorBreakdown {
    /// Median/IQR standardization of the first sample.
    pub first: RobustStandardization,
    /// Median/IQR standardization of the second sample.
    pub second: RobustStandardization,
    /// Sample covariance (N−1) of the two standardized series.
    pub covariance: f64,
    /// Sign of `covariance`: `-1.0`, `0.0` or `1.0` (NaN if undefined).
    ///
    /// A covariance of exactly zero gives `0.0`, which drops the second
    /// series from `combined`.
    pub sign: f64,
    /// `(Y1 + sign · Y2) / √2`, one entry per observation pair.
    pub combined: Vec<f64>,
    /// `Φ⁻¹(0.75) / Φ⁻¹(ksi)`.
    pub scale_factor: f64,
    /// IQR of `combined` at level `ksi`.
    pub tail_iqr: f64,
    /// The TailCor statistic, `scale_factor · tail_iqr`.
    pub value: f64,
}

/// Computes TailCor between two paired samples.
///
/// Each sample is standardized by its median and its `tau`-IQR; the
/// combined series is measured at level `ksi`. See the
/// [module documentation](self) for the definition.
///
/// # Errors
/// - [`TailCorError::ShapeMismatch`] if the samples differ in length.
/// - [`TailCorError::InsufficientData`] if there are fewer than 2 pairs.
/// - [`TailCorError::Domain`] if `ksi` or `tau` is outside `[0, 1]`.
///
/// Degenerate samples (zero IQR) and NaN observations are not errors: the
/// result is NaN. `ksi == 0.5` gives a non-finite scale factor.
///
/// # Examples
/// ```
/// use u_tailcor::tail::tail_correlation;
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let r = tail_correlation(&x, &x, 0.75, 0.75).unwrap();
/// assert!((r - std::f64::consts::SQRT_2).abs() < 1e-14);
/// ```
pub fn tail_correlation(x1: &[f64], x2: &[f64], ksi: f64, tau: f64) -> Result<f64> {
    tail_correlation_breakdown(x1, x2, ksi, tau).map(|b| b.value)
}

/// Computes TailCor and returns every intermediate quantity.
///
/// # Errors
/// Same as [`tail_correlation`].
pub fn tail_correlation_breakdown(
    x1: &[f64],
    x2: &[f64],
    ksi: f64,
    tau: f64,
) -> Result<TailCorBreakdown> {
    if x1.len() != x2.len() {
        return Err(TailCorError::ShapeMismatch {
            left: x1.len(),
            right: x2.len(),
        });
    }
    check_len(x1)?;
    check_probability("ksi", ksi)?;

    let first = RobustStandardization::fit(x1, tau)?;
    let second = RobustStandardization::fit(x2, tau)?;
    if first.is_degenerate() || second.is_degenerate() {
        debug!(
            first_scale = first.scale,
            second_scale = second.scale,
            "degenerate standardization, TailCor is undefined"
        );
    }
    let y1 = first.apply(x1);
    let y2 = second.apply(x2);

    let covariance = covariance(&y1, &y2).unwrap_or(f64::NAN);
    let sign = sign_of(covariance);
    if sign == 0.0 {
        debug!("standardized series are uncorrelated, dropping the second series");
    }

    let combined: Vec<f64> = y1
        .iter()
        .zip(&y2)
        .map(|(&a, &b)| FRAC_1_SQRT_2 * (a + sign * b))
        .collect();

    let scale_factor = scale_factor(ksi, DEFAULT_TAU);
    let tail_iqr = tail_spread(&combined, ksi);
    let value = scale_factor * tail_iqr;
    trace!(covariance, sign, scale_factor, tail_iqr, value, "tailcor");

    Ok(TailCorBreakdown {
        first,
        second,
        covariance,
        sign,
        combined,
        scale_factor,
        tail_iqr,
        value,
    })
}

// `f64::signum` maps 0.0 to 1.0; here an exact zero stays zero.
fn sign_of(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

// IQR of `data` at `ksi`, NaN if any entry is NaN. `ksi` is in [0, 1].
fn tail_spread(data: &[f64], ksi: f64) -> f64 {
    if data.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    let sorted = sorted_copy(data);
    let hi = quantile_sorted(&sorted, ksi).unwrap_or(f64::NAN);
    let lo = quantile_sorted(&sorted, 1.0 - ksi).unwrap_or(f64::NAN);
    hi - lo
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn paired(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        len.prop_flat_map(|n| {
            (
                proptest::collection::vec(-1e3_f64..1e3, n),
                proptest::collection::vec(-1e3_f64..1e3, n),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn scale_factor_self_is_exactly_one(t in 0.001_f64..0.999) {
            prop_assume!(t != 0.5);
            prop_assert_eq!(scale_factor(t, t), 1.0);
        }

        #[test]
        fn symmetric_in_arguments((x1, x2) in paired(4..=60), ksi in 0.6_f64..0.99) {
            let a = tail_correlation(&x1, &x2, ksi, 0.75).unwrap();
            let b = tail_correlation(&x2, &x1, ksi, 0.75).unwrap();
            prop_assume!(a.is_finite());
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0), "{} vs {}", a, b);
        }

        #[test]
        fn invariant_to_positive_affine_maps(
            (x1, x2) in paired(4..=60),
            a in 0.1_f64..10.0,
            shift in -100.0_f64..100.0,
            ksi in 0.6_f64..0.99,
        ) {
            let base = tail_correlation(&x1, &x2, ksi, 0.75).unwrap();
            prop_assume!(base.is_finite());
            let moved: Vec<f64> = x1.iter().map(|&x| a * x + shift).collect();
            let r = tail_correlation(&moved, &x2, ksi, 0.75).unwrap();
            prop_assert!((r - base).abs() <= 1e-8 * base.abs().max(1.0), "{} vs {}", r, base);
        }

        #[test]
        fn sign_matches_covariance((x1, x2) in paired(2..=40)) {
            let b = tail_correlation_breakdown(&x1, &x2, 0.9, 0.75).unwrap();
            prop_assume!(b.covariance.is_finite());
            prop_assert_eq!(b.sign, sign_of(b.covariance));
            prop_assert_eq!(b.combined.len(), x1.len());
        }
    }
}
