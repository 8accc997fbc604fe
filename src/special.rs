//! Standard normal distribution functions.
//!
//! Double-precision approximations of the standard normal CDF, PDF and
//! quantile function. The quantile function is the one the TailCor scale
//! factor is built on, so it is accurate to roughly machine precision
//! rather than to a few significant digits.

/// 1/√(2π) ≈ 0.3989422804014327
#[allow(clippy::excessive_precision)]
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// √(2π)
#[allow(clippy::excessive_precision)]
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099;

/// Standard normal CDF Φ(x) = P(Z ≤ x) for Z ~ N(0,1).
///
/// # Algorithm
/// Hart's (1968) rational approximation as restated by West, using a
/// continued fraction beyond |x| ≈ 7.07.
///
/// Reference: West (2005), "Better approximations to cumulative normal
/// functions", *Wilmott Magazine*, pp. 70–76.
///
/// # Accuracy
/// Absolute error on the order of 1e-15 across the real line.
///
/// # Examples
/// ```
/// use u_tailcor::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((standard_normal_cdf(1.959963984540054) - 0.975).abs() < 1e-12);
/// ```
#[allow(clippy::excessive_precision)]
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let abs_x = x.abs();
    let tail = if abs_x > 37.0 {
        0.0
    } else {
        let exponential = (-0.5 * abs_x * abs_x).exp();
        if abs_x < 7.071_067_811_865_47 {
            let num = ((((((3.52624965998911e-02 * abs_x + 0.700383064443688) * abs_x
                + 6.37396220353165)
                * abs_x
                + 33.912866078383)
                * abs_x
                + 112.079291497871)
                * abs_x
                + 221.213596169931)
                * abs_x
                + 220.206867912376)
                * exponential;
            let den = ((((((8.83883476483184e-02 * abs_x + 1.75566716318264) * abs_x
                + 16.064177579207)
                * abs_x
                + 86.7807322029461)
                * abs_x
                + 296.564248779674)
                * abs_x
                + 637.333633378831)
                * abs_x
                + 793.826512519948)
                * abs_x
                + 440.413735824752;
            num / den
        } else {
            let mut cf = abs_x + 0.65;
            cf = abs_x + 4.0 / cf;
            cf = abs_x + 3.0 / cf;
            cf = abs_x + 2.0 / cf;
            cf = abs_x + 1.0 / cf;
            exponential / cf / SQRT_2PI
        }
    };

    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Inverse of the standard normal CDF (the quantile function Φ⁻¹).
///
/// Given a probability `p ∈ (0, 1)`, returns `z` such that `Φ(z) = p`.
///
/// # Algorithm
/// Wichura's PPND16: a degree-7 rational approximation in the central
/// region `|p − 0.5| ≤ 0.425`, and two degree-7 rational approximations
/// in `r = √(−ln min(p, 1−p))` for the tails.
///
/// Reference: Wichura (1988), "Algorithm AS 241: The Percentage Points of
/// the Normal Distribution", *Applied Statistics* 37(3), pp. 477–484.
///
/// # Accuracy
/// Relative error about 1e-16.
///
/// # Returns
/// - `f64::NAN` if `p` is outside `[0, 1]` or NaN.
/// - `f64::NEG_INFINITY` if `p == 0.0`.
/// - `f64::INFINITY` if `p == 1.0`.
///
/// # Examples
/// ```
/// use u_tailcor::special::inverse_normal_cdf;
/// assert_eq!(inverse_normal_cdf(0.5), 0.0);
/// assert!((inverse_normal_cdf(0.975) - 1.959963984540054).abs() < 1e-14);
/// ```
#[allow(clippy::excessive_precision)]
pub fn inverse_normal_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    const SPLIT1: f64 = 0.425;
    const SPLIT2: f64 = 5.0;
    const CONST1: f64 = 0.180625;
    const CONST2: f64 = 1.6;

    const A: [f64; 8] = [
        3.387_132_872_796_366_608_0e0,
        1.331_416_678_917_843_774_5e2,
        1.971_590_950_306_551_442_7e3,
        1.373_169_376_550_946_112_5e4,
        4.592_195_393_154_987_145_7e4,
        6.726_577_092_700_870_085_3e4,
        3.343_057_558_358_812_810_5e4,
        2.509_080_928_730_122_672_7e3,
    ];
    const B: [f64; 8] = [
        1.0,
        4.231_333_070_160_091_125_2e1,
        6.871_870_074_920_579_083_0e2,
        5.394_196_021_424_751_107_7e3,
        2.121_379_430_158_659_586_7e4,
        3.930_789_580_009_271_061_0e4,
        2.872_908_573_572_194_267_4e4,
        5.226_495_278_852_854_561_0e3,
    ];
    const C: [f64; 8] = [
        1.423_437_110_749_683_577_34e0,
        4.630_337_846_156_545_295_90e0,
        5.769_497_221_460_691_405_50e0,
        3.647_848_324_763_204_605_04e0,
        1.270_458_252_452_368_382_58e0,
        2.417_807_251_774_506_117_70e-1,
        2.272_384_498_926_918_458_33e-2,
        7.745_450_142_783_414_076_40e-4,
    ];
    const D: [f64; 8] = [
        1.0,
        2.053_191_626_637_758_821_87e0,
        1.676_384_830_183_803_849_40e0,
        6.897_673_349_851_000_045_50e-1,
        1.481_039_764_274_800_745_90e-1,
        1.519_866_656_361_645_719_66e-2,
        5.475_938_084_995_344_946_00e-4,
        1.050_750_071_644_416_843_24e-9,
    ];
    const E: [f64; 8] = [
        6.657_904_643_501_103_777_20e0,
        5.463_784_911_164_114_369_90e0,
        1.784_826_539_917_291_335_80e0,
        2.965_605_718_285_048_912_30e-1,
        2.653_218_952_657_612_309_30e-2,
        1.242_660_947_388_078_438_60e-3,
        2.711_555_568_743_487_578_15e-5,
        2.010_334_399_292_288_132_65e-7,
    ];
    const F: [f64; 8] = [
        1.0,
        5.998_322_065_558_879_376_90e-1,
        1.369_298_809_227_358_053_10e-1,
        1.487_536_129_085_061_485_25e-2,
        7.868_691_311_456_132_591_00e-4,
        1.846_318_317_510_054_681_80e-5,
        1.421_511_758_316_445_888_70e-7,
        2.044_263_103_389_939_785_64e-15,
    ];

    let q = p - 0.5;
    if q.abs() <= SPLIT1 {
        let r = CONST1 - q * q;
        return q * horner(&A, r) / horner(&B, r);
    }

    let r = if q < 0.0 { p } else { 1.0 - p };
    let r = (-r.ln()).sqrt();
    let z = if r <= SPLIT2 {
        let r = r - CONST2;
        horner(&C, r) / horner(&D, r)
    } else {
        let r = r - SPLIT2;
        horner(&E, r) / horner(&F, r)
    };

    if q < 0.0 {
        -z
    } else {
        z
    }
}

/// Standard normal PDF φ(x) = (1/√(2π)) exp(-x²/2).
///
/// # Examples
/// ```
/// use u_tailcor::special::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

// Coefficients in ascending order of power.
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- standard_normal_cdf ---

    #[test]
    fn test_cdf_at_zero() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 8.0] {
            let sum = standard_normal_cdf(x) + standard_normal_cdf(-x);
            assert!(
                (sum - 1.0).abs() < 1e-14,
                "Φ({x}) + Φ(-{x}) = {sum}, expected 1.0"
            );
        }
    }

    #[test]
    fn test_cdf_known_values() {
        assert!((standard_normal_cdf(1.0) - 0.8413447460685429).abs() < 1e-13);
        assert!((standard_normal_cdf(-2.0) - 0.022750131948179195).abs() < 1e-13);
        assert!((standard_normal_cdf(3.0) - 0.9986501019683699).abs() < 1e-13);
    }

    #[test]
    fn test_cdf_extremes() {
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
    }

    // --- inverse_normal_cdf ---

    #[test]
    fn test_inverse_cdf_at_half() {
        assert_eq!(inverse_normal_cdf(0.5), 0.0);
    }

    #[test]
    fn test_inverse_cdf_known_values() {
        // Reference values from scipy.stats.norm.ppf.
        let cases = [
            (0.75, 0.6744897501960817),
            (0.95, 1.6448536269514722),
            (0.975, 1.959963984540054),
            (0.99, 2.3263478740408408),
            (0.999, 3.090232306167813),
            (0.05, -1.6448536269514729),
            (0.25, -0.6744897501960817),
            (1e-10, -6.361340902404056),
        ];
        for (p, expected) in cases {
            let z = inverse_normal_cdf(p);
            assert!(
                (z - expected).abs() < 1e-12 * expected.abs().max(1.0),
                "Φ⁻¹({p}) = {z}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_inverse_cdf_symmetry() {
        for &p in &[0.1, 0.2, 0.3, 0.4, 0.01, 1e-6] {
            let z1 = inverse_normal_cdf(p);
            let z2 = inverse_normal_cdf(1.0 - p);
            assert!(
                (z1 + z2).abs() < 1e-9,
                "Φ⁻¹({p}) + Φ⁻¹({}) = {}, expected ~0",
                1.0 - p,
                z1 + z2
            );
        }
    }

    #[test]
    fn test_inverse_cdf_boundaries() {
        assert_eq!(inverse_normal_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(1.0), f64::INFINITY);
        assert!(inverse_normal_cdf(-0.1).is_nan());
        assert!(inverse_normal_cdf(1.5).is_nan());
        assert!(inverse_normal_cdf(f64::NAN).is_nan());
    }

    // --- standard_normal_pdf ---

    #[test]
    fn test_pdf_symmetric() {
        assert_eq!(standard_normal_pdf(1.3), standard_normal_pdf(-1.3));
        assert!(standard_normal_pdf(f64::NAN).is_nan());
    }
}
