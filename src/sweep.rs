//! Sensitivity sweep over the null proportion
//!
//! Scans a grid of null proportions and reports the largest one at which
//! the z-test is still significant. Used in the write-up to show how far
//! the null can be pushed before the one-sided result loses significance.

use tracing::debug;

use crate::error::StatError;
use crate::ztest::{one_sample_proportion_ztest, Alternative};

/// Slack on the inclusive upper bound of the grid scan.
const BOUNDARY_EPS: f64 = 1e-12;

/// Parameters for a threshold sweep. The defaults match the study script:
/// one-sided "less" at α = 0.05 over p0 ∈ [0.70, 0.90] in steps of 0.0005.
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Significance level the p-value is compared against
    pub alpha: f64,
    /// Alternative hypothesis for every per-step test
    pub alternative: Alternative,
    /// Whether each per-step test applies the continuity correction
    pub continuity_correction: bool,
    /// Lower end of the scanned p0 range (inclusive)
    pub p0_min: f64,
    /// Upper end of the scanned p0 range (inclusive)
    pub p0_max: f64,
    /// Grid spacing
    pub step: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            alternative: Alternative::Less,
            continuity_correction: false,
            p0_min: 0.70,
            p0_max: 0.90,
            step: 0.0005,
        }
    }
}

/// Find the largest scanned `p0` for which the test is significant
/// (`p_value < alpha`), or `None` if no grid point is.
///
/// The scan covers the whole grid with no early exit: significance is not
/// guaranteed monotone in `p0` once the continuity correction is in play,
/// so the last significant point can only be known after visiting every
/// step. Each grid point is computed as `p0_min + i·step` so rounding
/// error does not accumulate across the scan.
///
/// An empty range (`p0_min > p0_max`) yields `Ok(None)` without iterating.
/// A non-positive or non-finite `step` is rejected up front; any argument
/// error from the underlying test surfaces on the first step, since every
/// step shares `k`, `n`, and the alternative.
pub fn find_threshold_crossing(
    k: u64,
    n: u64,
    params: &SweepParams,
) -> Result<Option<f64>, StatError> {
    if !(params.step > 0.0 && params.step.is_finite()) {
        return Err(StatError::invalid("step must be positive"));
    }
    if !(params.p0_min.is_finite() && params.p0_max.is_finite()) {
        return Err(StatError::invalid("sweep range must be finite"));
    }
    // An empty range is a no-crossing result, not an error.
    if params.p0_min > params.p0_max {
        return Ok(None);
    }

    let mut last_significant = None;
    let mut i: u64 = 0;
    loop {
        let p0 = params.p0_min + i as f64 * params.step;
        if p0 > params.p0_max + BOUNDARY_EPS {
            break;
        }
        let result =
            one_sample_proportion_ztest(k, n, p0, params.alternative, params.continuity_correction)?;
        if result.p_value < params.alpha {
            last_significant = Some(p0);
        }
        i += 1;
    }

    debug!(steps = i, ?last_significant, "threshold sweep complete");
    Ok(last_significant)
}
