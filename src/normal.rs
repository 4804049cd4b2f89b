//! Standard normal cumulative distribution function
//!
//! Uses the error function from `libm` rather than a polynomial
//! approximation, so the CDF is accurate well beyond table precision
//! across the whole range the tests exercise.

use std::f64::consts::SQRT_2;

/// Φ(z), the standard normal CDF: Φ(z) = 0.5 · (1 + erf(z / √2)).
///
/// Total on all reals; returns a value in [0, 1].
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_cdf_at_zero() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 1.96, 2.5758, 4.0, 8.0] {
            let sum = normal_cdf(-x) + normal_cdf(x);
            assert!((sum - 1.0).abs() < 1e-12, "asymmetric at {x}: {sum}");
        }
    }

    #[test]
    fn test_normal_cdf_known_quantiles() {
        // Reference values from the standard normal distribution
        assert!((normal_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-10);
        assert!((normal_cdf(1.959_963_984_540_054) - 0.975).abs() < 1e-10);
        assert!((normal_cdf(-1.644_853_626_951_472_2) - 0.05).abs() < 1e-10);
        assert!((normal_cdf(2.575_829_303_548_901) - 0.995).abs() < 1e-10);
    }

    #[test]
    fn test_normal_cdf_tails() {
        assert!((normal_cdf(10.0) - 1.0).abs() < 1e-10);
        assert!(normal_cdf(-10.0) < 1e-10);
        assert!(normal_cdf(-10.0) >= 0.0);
    }

    #[test]
    fn test_normal_cdf_monotone() {
        let mut prev = normal_cdf(-10.0);
        let mut x = -10.0;
        while x <= 10.0 {
            let cur = normal_cdf(x);
            assert!(cur >= prev, "not monotone at {x}");
            prev = cur;
            x += 0.25;
        }
    }
}
