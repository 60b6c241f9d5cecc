//! Dickey-Fuller distribution approximations for the constant-only regression.
//!
//! p-values follow the MacKinnon (1994) response surface for the asymptotic
//! distribution; critical values follow the MacKinnon (2010) finite-sample
//! response surface.

use std::f64::consts::SQRT_2;

use diagnostic_spi::CriticalValues;
use statrs::function::erf::erfc;

/// Above this statistic the p-value is 1.
const TAU_MAX: f64 = 2.74;
/// Below this statistic the p-value is 0.
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials.
const TAU_STAR: f64 = -1.61;

const TAU_SMALLP: [f64; 3] = [2.1659, 1.4412, 0.038269];
const TAU_LARGEP: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

const CRIT_1: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Approximate p-value of an ADF statistic.
pub fn p_value(statistic: f64) -> f64 {
    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }
    let coefficients: &[f64] = if statistic <= TAU_STAR {
        &TAU_SMALLP
    } else {
        &TAU_LARGEP
    };
    standard_normal_cdf(polyval(coefficients, statistic)).clamp(0.0, 1.0)
}

/// Critical values for a regression with `nobs` rows.
pub fn critical_values(nobs: usize) -> CriticalValues {
    let n = nobs as f64;
    CriticalValues {
        one_percent: surface(&CRIT_1, n),
        five_percent: surface(&CRIT_5, n),
        ten_percent: surface(&CRIT_10, n),
    }
}

fn surface(b: &[f64; 4], n: f64) -> f64 {
    b[0] + b[1] / n + b[2] / n.powi(2) + b[3] / n.powi(3)
}

/// `c[0] + c[1] x + c[2] x^2 + ...`
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_percent_point() {
        let p = p_value(-2.86);
        assert!((p - 0.05).abs() < 0.002, "p = {}", p);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(p_value(3.0), 1.0);
        assert_eq!(p_value(-20.0), 0.0);
    }

    #[test]
    fn test_continuous_at_switch_point() {
        let below = p_value(TAU_STAR);
        let above = p_value(TAU_STAR + 1e-9);
        assert!((below - above).abs() < 0.01);
    }

    #[test]
    fn test_monotone() {
        let mut previous = 0.0;
        let mut stat = -10.0;
        while stat < 2.5 {
            let p = p_value(stat);
            assert!(p >= previous, "p-value decreased at {}", stat);
            previous = p;
            stat += 0.05;
        }
    }

    #[test]
    fn test_critical_values_large_sample() {
        let cv = critical_values(100_000);
        assert!((cv.one_percent + 3.43).abs() < 0.001);
        assert!((cv.five_percent + 2.86).abs() < 0.002);
        assert!((cv.ten_percent + 2.567).abs() < 0.001);
    }

    #[test]
    fn test_critical_values_small_sample_are_wider() {
        let small = critical_values(30);
        let large = critical_values(1000);
        assert!(small.five_percent < large.five_percent);
        assert!(small.one_percent < small.five_percent);
        assert!(small.five_percent < small.ten_percent);
    }

    #[test]
    fn test_polyval() {
        assert_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }
}
