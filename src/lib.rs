//! Veredicto - statistical analysis toolkit for the code-review civility study
//!
//! This library provides the one-sample proportion z-test (with optional
//! continuity correction) and a sensitivity sweep over the null proportion
//! backing the study's Section 6.1 numbers, plus Krippendorff's alpha for
//! inter-annotator agreement over a synthetic annotation dataset.

pub mod agreement;
pub mod cli;
pub mod error;
pub mod normal;
pub mod report;
pub mod sweep;
pub mod synthetic;
pub mod ztest;

pub use error::StatError;
pub use sweep::{find_threshold_crossing, SweepParams};
pub use ztest::{one_sample_proportion_ztest, Alternative, ZTestResult};
