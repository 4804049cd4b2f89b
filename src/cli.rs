//! CLI argument parsing for Veredicto

use clap::{Parser, Subcommand, ValueEnum};

use crate::ztest::Alternative;

/// Output format for computed results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "veredicto")]
#[command(version)]
#[command(about = "Proportion z-tests and annotator agreement for the code-review civility study", long_about = None)]
pub struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// One-sample proportion z-test
    Ztest {
        /// Observed successes
        #[arg(short = 'k', long = "successes")]
        successes: u64,

        /// Number of trials
        #[arg(short = 'n', long = "trials")]
        trials: u64,

        /// Hypothesized proportion, strictly inside (0,1)
        #[arg(long = "p0")]
        p0: f64,

        /// Alternative hypothesis
        #[arg(long, value_enum, default_value = "less")]
        alternative: Alternative,

        /// Apply the continuity correction
        #[arg(long = "continuity-correction")]
        continuity_correction: bool,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Sweep the null proportion and report the largest significant value
    Sweep {
        /// Observed successes
        #[arg(short = 'k', long = "successes")]
        successes: u64,

        /// Number of trials
        #[arg(short = 'n', long = "trials")]
        trials: u64,

        /// Significance level
        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        /// Alternative hypothesis for every scanned test
        #[arg(long, value_enum, default_value = "less")]
        alternative: Alternative,

        /// Apply the continuity correction at every step
        #[arg(long = "continuity-correction")]
        continuity_correction: bool,

        /// Lower end of the scanned p0 range
        #[arg(long = "p0-min", default_value_t = 0.70)]
        p0_min: f64,

        /// Upper end of the scanned p0 range
        #[arg(long = "p0-max", default_value_t = 0.90)]
        p0_max: f64,

        /// Grid spacing
        #[arg(long, default_value_t = 0.0005)]
        step: f64,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate synthetic annotations and compute per-trait agreement
    Agreement {
        /// Number of annotated comments to simulate
        #[arg(long, default_value_t = 310)]
        comments: usize,

        /// RNG seed for the synthetic dataset
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Reproduce the full study report (Section 6.1 numbers plus agreement)
    Report {
        /// Number of annotated comments to simulate
        #[arg(long, default_value_t = 310)]
        comments: usize,

        /// RNG seed for the synthetic dataset
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
