//! Krippendorff's alpha for nominal inter-annotator agreement
//!
//! Operates on a reliability matrix of units (annotated items) by raters,
//! with `None` marking a missing rating. Only units with at least two
//! ratings contribute; each such unit adds its ordered rating pairs to a
//! coincidence matrix with weight 1/(m-1), where m is the number of
//! ratings in the unit.

use std::collections::HashMap;

use tracing::debug;

use crate::error::StatError;

/// Krippendorff's alpha at the nominal level of measurement.
///
/// `units[u][r]` is rater `r`'s label for unit `u`, or `None` if that
/// rater did not label the unit. Rows may have different lengths.
///
/// Returns `InvalidArgument` when no unit carries two or more ratings
/// (agreement is undefined without pairable values). When every pairable
/// rating falls in a single category there is no disagreement to expect
/// and alpha is 1.0 by convention.
pub fn nominal_alpha(units: &[Vec<Option<u32>>]) -> Result<f64, StatError> {
    let mut coincidence: HashMap<(u32, u32), f64> = HashMap::new();
    let mut pairable_units = 0usize;

    for unit in units {
        let values: Vec<u32> = unit.iter().copied().flatten().collect();
        let m = values.len();
        if m < 2 {
            continue;
        }
        pairable_units += 1;
        let weight = 1.0 / (m as f64 - 1.0);
        for (i, &a) in values.iter().enumerate() {
            for (j, &b) in values.iter().enumerate() {
                if i != j {
                    *coincidence.entry((a, b)).or_default() += weight;
                }
            }
        }
    }

    if pairable_units == 0 {
        return Err(StatError::invalid("no unit has two or more ratings"));
    }

    let n_total: f64 = coincidence.values().sum();
    let mut category_totals: HashMap<u32, f64> = HashMap::new();
    for (&(a, _), &count) in &coincidence {
        *category_totals.entry(a).or_default() += count;
    }

    let observed_disagreement: f64 = coincidence
        .iter()
        .filter(|(&(a, b), _)| a != b)
        .map(|(_, &count)| count)
        .sum();
    let sum_squared: f64 = category_totals.values().map(|c| c * c).sum();
    let expected_disagreement = (n_total * n_total - sum_squared) / (n_total - 1.0);

    debug!(
        pairable_units,
        n_total, observed_disagreement, expected_disagreement, "coincidence matrix built"
    );

    if expected_disagreement == 0.0 {
        // Single observed category: perfect agreement, nothing to expect.
        return Ok(1.0);
    }

    Ok(1.0 - observed_disagreement / expected_disagreement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u32, b: u32) -> Vec<Option<u32>> {
        vec![Some(a), Some(b)]
    }

    #[test]
    fn test_perfect_agreement_is_one() {
        let units = vec![pair(0, 0), pair(1, 1), pair(0, 0), pair(1, 1)];
        let alpha = nominal_alpha(&units).unwrap();
        assert!((alpha - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_category_is_one_by_convention() {
        let units = vec![pair(1, 1), pair(1, 1)];
        assert_eq!(nominal_alpha(&units).unwrap(), 1.0);
    }

    #[test]
    fn test_known_binary_value() {
        // Coincidences: o(0,0)=2, o(0,1)=o(1,0)=1, o(1,1)=4; n=8,
        // n_0=3, n_1=5. Do = 2, De = (64-34)/7 = 30/7.
        // alpha = 1 - 2*(7/30) = 0.5333...
        let units = vec![pair(0, 0), pair(0, 1), pair(1, 1), pair(1, 1)];
        let alpha = nominal_alpha(&units).unwrap();
        assert!((alpha - 0.533_333_333_333).abs() < 1e-9);
    }

    #[test]
    fn test_systematic_disagreement_is_negative() {
        let units = vec![pair(0, 1), pair(1, 0), pair(0, 1), pair(1, 0)];
        let alpha = nominal_alpha(&units).unwrap();
        assert!(alpha < 0.0);
        assert!(alpha >= -1.0 - 1e-12);
    }

    #[test]
    fn test_missing_ratings_are_skipped() {
        // The unit with a single rating contributes nothing; the result
        // must equal the same data without that unit.
        let with_missing = vec![pair(0, 0), pair(0, 1), vec![Some(1), None], pair(1, 1)];
        let without = vec![pair(0, 0), pair(0, 1), pair(1, 1)];
        let a = nominal_alpha(&with_missing).unwrap();
        let b = nominal_alpha(&without).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_three_raters_weighting() {
        // One unit, three raters, one dissent: m=3, weight 1/2.
        // o(0,0)=1, o(0,1)=o(1,0)=1, n=3, n_0=2, n_1=1.
        // Do = 2*(1/2)*2 = 2, De = (9-5)/2 = 2, alpha = 0.
        let units = vec![vec![Some(0), Some(0), Some(1)]];
        let alpha = nominal_alpha(&units).unwrap();
        assert!(alpha.abs() < 1e-12);
    }

    #[test]
    fn test_no_pairable_units_is_error() {
        let units = vec![vec![Some(0)], vec![None, Some(1)], vec![]];
        let err = nominal_alpha(&units).unwrap_err();
        assert_eq!(
            err,
            StatError::InvalidArgument {
                reason: "no unit has two or more ratings"
            }
        );
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(nominal_alpha(&[]).is_err());
    }
}
