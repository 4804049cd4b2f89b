//! Synthetic annotation dataset for the agreement analysis
//!
//! Reproduces the study's simulated labeling setup: each comment is
//! labeled by two or three raters across nine anti-social traits. Every
//! trait has a latent true label drawn per comment; raters report it
//! faithfully three times out of four and flip it otherwise. Generation
//! is fully deterministic under a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// The nine labeled traits from the annotation guideline.
pub const TRAIT_NAMES: [&str; 9] = [
    "Lack of specificity",
    "Discouragement without guidance",
    "Mockery",
    "Dismissive attitude",
    "Personal attacks",
    "Excessive control",
    "Unconscious bias",
    "Disregard for other time or boundaries",
    "Threats or intimidation",
];

/// Probability that a comment is labeled by two raters (otherwise three).
const TWO_RATER_PROB: f64 = 0.6;

/// Probability a rater reports the latent label instead of flipping it.
const RATER_FIDELITY: f64 = 0.75;

/// Ratings for one trait: a units-by-raters reliability matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitAnnotations {
    /// Trait being labeled
    pub trait_name: String,
    /// `units[comment][rater]` binary label; `None` marks a missing rating
    pub units: Vec<Vec<Option<u32>>>,
}

/// The full synthetic dataset, one reliability matrix per trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticAnnotations {
    pub traits: Vec<TraitAnnotations>,
}

/// Generate annotations for `n_comments` comments under the given seed.
///
/// The rater count is drawn once per comment and shared by all traits, as
/// in the study setup. The latent label is Bernoulli(0.05 + 0.04·i) for
/// trait index `i`, so base rates differ across traits.
pub fn generate_annotations(n_comments: usize, seed: u64) -> SyntheticAnnotations {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut traits: Vec<TraitAnnotations> = TRAIT_NAMES
        .iter()
        .map(|name| TraitAnnotations {
            trait_name: (*name).to_string(),
            units: Vec::with_capacity(n_comments),
        })
        .collect();

    for _comment in 0..n_comments {
        let n_raters = if rng.gen_bool(TWO_RATER_PROB) { 2 } else { 3 };
        for (trait_idx, annotations) in traits.iter_mut().enumerate() {
            let p_true = 0.05 + 0.04 * trait_idx as f64;
            let true_label = u32::from(rng.gen_bool(p_true));
            let ratings = (0..n_raters)
                .map(|_| {
                    let label = if rng.gen_bool(RATER_FIDELITY) {
                        true_label
                    } else {
                        1 - true_label
                    };
                    Some(label)
                })
                .collect();
            annotations.units.push(ratings);
        }
    }

    SyntheticAnnotations { traits }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_all_traits_and_units() {
        let data = generate_annotations(310, 42);
        assert_eq!(data.traits.len(), 9);
        for annotations in &data.traits {
            assert_eq!(annotations.units.len(), 310);
        }
    }

    #[test]
    fn test_rater_count_is_two_or_three_and_shared_across_traits() {
        let data = generate_annotations(50, 7);
        for comment in 0..50 {
            let n_raters = data.traits[0].units[comment].len();
            assert!(n_raters == 2 || n_raters == 3);
            for annotations in &data.traits {
                assert_eq!(annotations.units[comment].len(), n_raters);
            }
        }
    }

    #[test]
    fn test_labels_are_binary_and_present() {
        let data = generate_annotations(100, 3);
        for annotations in &data.traits {
            for unit in &annotations.units {
                for rating in unit {
                    let label = rating.expect("generated ratings are never missing");
                    assert!(label <= 1);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        assert_eq!(generate_annotations(80, 42), generate_annotations(80, 42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_annotations(80, 1), generate_annotations(80, 2));
    }

    #[test]
    fn test_positive_rate_grows_with_trait_index() {
        // The latent base rate grows with trait index; compare the first
        // and last traits over a large sample.
        let data = generate_annotations(2000, 9);
        let positive_rate = |annotations: &TraitAnnotations| {
            let (mut pos, mut total) = (0usize, 0usize);
            for unit in &annotations.units {
                for rating in unit.iter().flatten() {
                    total += 1;
                    pos += *rating as usize;
                }
            }
            pos as f64 / total as f64
        };
        let first = positive_rate(&data.traits[0]);
        let last = positive_rate(&data.traits[8]);
        assert!(last > first);
    }

    #[test]
    fn test_zero_comments_is_empty() {
        let data = generate_annotations(0, 42);
        assert_eq!(data.traits.len(), 9);
        assert!(data.traits.iter().all(|t| t.units.is_empty()));
    }
}
