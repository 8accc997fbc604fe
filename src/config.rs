//! Configuration for TailCor evaluation.

use crate::error::{Result, TailCorError};
use crate::robust::DEFAULT_TAU;
use crate::tail::{scale_factor, tail_correlation, tail_correlation_breakdown, TailCorBreakdown};

/// Probability levels for a TailCor evaluation.
///
/// # Examples
/// ```
/// use u_tailcor::TailCorConfig;
/// let config = TailCorConfig::new(0.99).with_tau(0.8);
/// assert!(config.validate().is_ok());
/// let x: Vec<f64> = (1..=20).map(f64::from).collect();
/// let r = config.evaluate(&x, &x).unwrap();
/// assert!(r.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TailCorConfig {
    /// Tail probability level at which the combined series is measured
    /// (default: 0.95).
    pub ksi: f64,

    /// Percentile width for the robust standardization (default: 0.75).
    pub tau: f64,
}

impl Default for TailCorConfig {
    fn default() -> Self {
        Self {
            ksi: 0.95,
            tau: DEFAULT_TAU,
        }
    }
}

impl TailCorConfig {
    /// Creates a config for tail level `ksi` with the default `tau`.
    pub fn new(ksi: f64) -> Self {
        Self {
            ksi,
            ..Self::default()
        }
    }

    /// Sets the tail probability level.
    pub fn with_ksi(mut self, ksi: f64) -> Self {
        self.ksi = ksi;
        self
    }

    /// Sets the standardization width.
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Checks that both levels lie strictly inside `(0, 1)` and that
    /// `ksi != 0.5`, i.e. that the scale factor is finite.
    ///
    /// [`evaluate`](Self::evaluate) does not call this; it accepts the
    /// same boundary values as [`tail_correlation`].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("ksi", self.ksi), ("tau", self.tau)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(TailCorError::Domain { name, value });
            }
        }
        if self.ksi == 0.5 {
            return Err(TailCorError::Domain {
                name: "ksi",
                value: self.ksi,
            });
        }
        Ok(())
    }

    /// `Φ⁻¹(0.75) / Φ⁻¹(ksi)` for this config.
    pub fn scale_factor(&self) -> f64 {
        scale_factor(self.ksi, DEFAULT_TAU)
    }

    /// Runs [`tail_correlation`] with this config's levels.
    pub fn evaluate(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        tail_correlation(x1, x2, self.ksi, self.tau)
    }

    /// Runs [`tail_correlation_breakdown`] with this config's levels.
    pub fn breakdown(&self, x1: &[f64], x2: &[f64]) -> Result<TailCorBreakdown> {
        tail_correlation_breakdown(x1, x2, self.ksi, self.tau)
    }
}
