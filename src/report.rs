//! Report harness reproducing the write-up's printed numbers
//!
//! Fixed inputs from Section 6.1 of the study: 131 of 180 sampled review
//! comments matched the rubric, tested against a null proportion of 0.80.
//! The report covers one- and two-sided tests with and without continuity
//! correction, sensitivity sweeps over the null, and the inter-annotator
//! agreement section.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;

use crate::agreement::nominal_alpha;
use crate::error::StatError;
use crate::sweep::{find_threshold_crossing, SweepParams};
use crate::synthetic::{generate_annotations, SyntheticAnnotations};
use crate::ztest::{one_sample_proportion_ztest, Alternative, ZTestResult};

/// Comments matching the rubric in the Section 6.1 sample.
pub const STUDY_SUCCESSES: u64 = 131;
/// Total sampled review comments.
pub const STUDY_TRIALS: u64 = 180;
/// Null proportion tested in the write-up.
pub const STUDY_NULL_P: f64 = 0.80;
/// Significance level used throughout.
pub const STUDY_ALPHA: f64 = 0.05;
/// Sensitivity sweep range for the null proportion.
pub const STUDY_SWEEP_MIN: f64 = 0.70;
pub const STUDY_SWEEP_MAX: f64 = 0.85;

/// Alpha for one trait's reliability matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitAlpha {
    pub trait_name: String,
    pub alpha: f64,
}

/// Agreement section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgreementReport {
    pub traits: Vec<TraitAlpha>,
    pub average_alpha: f64,
}

/// Everything the write-up prints, in one serializable record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    pub one_sided: ZTestResult,
    pub one_sided_corrected: ZTestResult,
    pub two_sided: ZTestResult,
    pub two_sided_corrected: ZTestResult,
    /// Largest significant null proportion in the sweep, uncorrected
    pub crossing: Option<f64>,
    /// Largest significant null proportion in the sweep, corrected
    pub crossing_corrected: Option<f64>,
    pub agreement: AgreementReport,
}

/// Compute per-trait alphas and their average for a generated dataset.
pub fn agreement_report(data: &SyntheticAnnotations) -> Result<AgreementReport, StatError> {
    let mut traits = Vec::with_capacity(data.traits.len());
    for annotations in &data.traits {
        let alpha = nominal_alpha(&annotations.units)?;
        debug!(trait_name = %annotations.trait_name, alpha, "computed trait alpha");
        traits.push(TraitAlpha {
            trait_name: annotations.trait_name.clone(),
            alpha,
        });
    }
    let average_alpha = traits.iter().map(|t| t.alpha).sum::<f64>() / traits.len() as f64;
    Ok(AgreementReport {
        traits,
        average_alpha,
    })
}

/// Build the full study report from the fixed Section 6.1 inputs plus a
/// freshly generated annotation dataset.
pub fn build_study_report(n_comments: usize, seed: u64) -> Result<StudyReport, StatError> {
    let ztest = |alternative, cc| {
        one_sample_proportion_ztest(STUDY_SUCCESSES, STUDY_TRIALS, STUDY_NULL_P, alternative, cc)
    };

    let sweep = |cc| {
        find_threshold_crossing(
            STUDY_SUCCESSES,
            STUDY_TRIALS,
            &SweepParams {
                alpha: STUDY_ALPHA,
                alternative: Alternative::Less,
                continuity_correction: cc,
                p0_min: STUDY_SWEEP_MIN,
                p0_max: STUDY_SWEEP_MAX,
                step: 0.0005,
            },
        )
    };

    let data = generate_annotations(n_comments, seed);

    Ok(StudyReport {
        one_sided: ztest(Alternative::Less, false)?,
        one_sided_corrected: ztest(Alternative::Less, true)?,
        two_sided: ztest(Alternative::TwoSided, false)?,
        two_sided_corrected: ztest(Alternative::TwoSided, true)?,
        crossing: sweep(false)?,
        crossing_corrected: sweep(true)?,
        agreement: agreement_report(&data)?,
    })
}

fn write_ztest_line(out: &mut String, header: &str, r: &ZTestResult) {
    let _ = writeln!(out, "=== {header} ===");
    let _ = writeln!(
        out,
        "p_hat={:.6}, z={:.4}, p={:.6}",
        r.p_hat, r.z, r.p_value
    );
}

fn write_crossing_line(out: &mut String, label: &str, crossing: Option<f64>) {
    match crossing {
        Some(p0) => {
            let _ = writeln!(out, "{label}: ~ p0 >= {p0:.4}");
        }
        None => {
            let _ = writeln!(out, "{label}: never significant in sweep range");
        }
    }
}

/// Render the report in the format the write-up quotes.
pub fn render_text(report: &StudyReport) -> String {
    let mut out = String::new();

    write_ztest_line(&mut out, "One-sided (less), no CC", &report.one_sided);
    write_ztest_line(
        &mut out,
        "One-sided (less), with CC",
        &report.one_sided_corrected,
    );
    write_ztest_line(&mut out, "Two-sided, no CC", &report.two_sided);
    write_ztest_line(&mut out, "Two-sided, with CC", &report.two_sided_corrected);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "=== Approx p0 where one-sided p < {STUDY_ALPHA} starts (sweep) ==="
    );
    write_crossing_line(&mut out, "No CC", report.crossing);
    write_crossing_line(&mut out, "With CC", report.crossing_corrected);

    let _ = writeln!(out);
    let _ = writeln!(out, "=== Inter-annotator agreement ===");
    for t in &report.agreement.traits {
        let _ = writeln!(
            out,
            "{}: Krippendorff's alpha = {:.3}",
            t.trait_name, t.alpha
        );
    }
    let _ = writeln!(
        out,
        "\nAverage Krippendorff's alpha across {} traits: {:.3}",
        report.agreement.traits.len(),
        report.agreement.average_alpha
    );

    out
}
