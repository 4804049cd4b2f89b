//! One-sample proportion z-test with optional continuity correction
//!
//! Tests an observed proportion `k/n` against a hypothesized proportion
//! `p0` using the normal approximation to the binomial. The continuity
//! correction shifts the estimate by half a count toward the null, which
//! makes the test more conservative.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::StatError;
use crate::normal::normal_cdf;

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    /// H1: p < p0
    Less,
    /// H1: p > p0
    Greater,
    /// H1: p ≠ p0
    TwoSided,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alternative::Less => "less",
            Alternative::Greater => "greater",
            Alternative::TwoSided => "two-sided",
        };
        f.write_str(name)
    }
}

impl FromStr for Alternative {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            "two-sided" => Ok(Alternative::TwoSided),
            _ => Err(StatError::invalid("unsupported alternative")),
        }
    }
}

/// Outcome of a one-sample proportion z-test.
///
/// A plain immutable record: produced once, never mutated. Echoes the
/// inputs alongside the computed statistic and p-value so a serialized
/// result is self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZTestResult {
    /// Number of trials
    pub n: u64,
    /// Number of successes
    pub k: u64,
    /// Sample proportion k/n
    pub p_hat: f64,
    /// Hypothesized proportion under the null
    pub p0: f64,
    /// Test statistic
    pub z: f64,
    /// P-value under the chosen alternative
    pub p_value: f64,
    /// Alternative hypothesis the p-value was computed for
    pub alternative: Alternative,
    /// Whether the continuity correction was applied
    pub continuity_correction: bool,
}

/// One-sample z-test for a proportion: `k` successes out of `n` trials
/// against the null proportion `p0`.
///
/// Validation fails fast with [`StatError::InvalidArgument`] before any
/// computation: `n` must be positive, `k ≤ n`, and `p0` strictly inside
/// (0, 1). `k` and `n` are unsigned, so negative counts are
/// unrepresentable rather than checked.
///
/// Pure function: the same inputs always produce the same result, with no
/// side effects beyond the returned record.
pub fn one_sample_proportion_ztest(
    k: u64,
    n: u64,
    p0: f64,
    alternative: Alternative,
    continuity_correction: bool,
) -> Result<ZTestResult, StatError> {
    if n == 0 {
        return Err(StatError::invalid("n must be positive"));
    }
    if k > n {
        return Err(StatError::invalid("k out of range"));
    }
    if !(p0 > 0.0 && p0 < 1.0) {
        return Err(StatError::invalid("p0 out of (0,1)"));
    }

    let n_f = n as f64;
    let p_hat = k as f64 / n_f;
    let se = (p0 * (1.0 - p0) / n_f).sqrt();

    // Continuity correction: adjust p_hat by half a count toward the null
    // boundary in the direction of the alternative. The two-sided rule
    // (sign depends on which side of p0 the estimate falls) is the exact
    // convention the published report numbers depend on.
    let adj = if continuity_correction {
        match alternative {
            // makes z less negative (more conservative)
            Alternative::Less => 0.5 / n_f,
            // makes z less positive (more conservative)
            Alternative::Greater => -0.5 / n_f,
            Alternative::TwoSided => {
                if p_hat > p0 {
                    -0.5 / n_f
                } else {
                    0.5 / n_f
                }
            }
        }
    } else {
        0.0
    };

    let z = (p_hat + adj - p0) / se;

    let p_value = match alternative {
        Alternative::Less => normal_cdf(z),
        Alternative::Greater => 1.0 - normal_cdf(z),
        // Both tails sum to at most one analytically; the clamp guards
        // against floating-point overshoot.
        Alternative::TwoSided => {
            let phi = normal_cdf(z);
            (2.0 * phi.min(1.0 - phi)).min(1.0)
        }
    };

    Ok(ZTestResult {
        n,
        k,
        p_hat,
        p0,
        z,
        p_value,
        alternative,
        continuity_correction,
    })
}
