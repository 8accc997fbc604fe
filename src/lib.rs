//! # u-tailcor
//!
//! Robust tail-dependence measurement for paired samples.
//!
//! TailCor standardizes two series by their median and interquartile
//! range, combines them along their dominant co-movement direction, and
//! measures the spread of the combination deep in the tails. The result
//! is calibrated so that independent Gaussian series score about 1 and
//! perfectly dependent series score about √2.
//!
//! ## Modules
//!
//! - [`tail`] — the TailCor statistic and its scale factor
//! - [`robust`] — generalized IQR and median/IQR standardization
//! - [`stats`] — R-7 quantiles, median, sample covariance
//! - [`special`] — standard normal CDF, PDF and quantile function
//! - [`config`] — bundled probability levels
//! - [`error`] — error type
//!
//! ## Example
//!
//! ```
//! use u_tailcor::{iqr, scale_factor, tail_correlation, DEFAULT_TAU};
//!
//! let x1 = [0.2, -1.3, 0.8, 2.4, -0.5, 1.1, -2.2, 0.0, 3.1, -0.9];
//! let x2 = [0.1, -0.9, 1.2, 1.8, -0.2, 0.4, -1.9, 0.3, 2.5, -1.4];
//!
//! let spread = iqr(&x1, DEFAULT_TAU).unwrap();
//! assert!(spread > 0.0);
//! assert_eq!(scale_factor(0.9, 0.9), 1.0);
//!
//! let r = tail_correlation(&x1, &x2, 0.95, DEFAULT_TAU).unwrap();
//! assert!((r - 1.347904181251662).abs() < 1e-12);
//! ```
//!
//! ## Error Handling
//!
//! Structural problems (length mismatch, fewer than two observations,
//! probability levels outside `[0, 1]`) are reported as [`TailCorError`].
//! Numerical degeneracies are not: a zero-IQR sample or `ksi = 0.5`
//! shows up as `NaN`/`±inf` in the returned value.

pub mod config;
pub mod error;
pub mod robust;
pub mod special;
pub mod stats;
pub mod tail;

pub use config::TailCorConfig;
pub use error::{Result, TailCorError};
pub use robust::{iqr, standardize, RobustStandardization, DEFAULT_TAU};
pub use tail::{scale_factor, tail_correlation, tail_correlation_breakdown, TailCorBreakdown};
