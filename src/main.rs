use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use veredicto::cli::{Cli, Command, OutputFormat};
use veredicto::report::{agreement_report, build_study_report, render_text, AgreementReport};
use veredicto::sweep::{find_threshold_crossing, SweepParams};
use veredicto::synthetic::generate_annotations;
use veredicto::ztest::{one_sample_proportion_ztest, ZTestResult};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print a z-test result in the format the write-up quotes
fn print_ztest(result: &ZTestResult) {
    println!(
        "p_hat={:.6}, z={:.4}, p={:.6}",
        result.p_hat, result.z, result.p_value
    );
}

/// Print a sweep outcome
fn print_crossing(crossing: Option<f64>) {
    match crossing {
        Some(p0) => println!("~ p0 >= {p0:.4}"),
        None => println!("never significant in sweep range"),
    }
}

/// Print per-trait alphas and their average
fn print_agreement(report: &AgreementReport) {
    for t in &report.traits {
        println!("{}: Krippendorff's alpha = {:.3}", t.trait_name, t.alpha);
    }
    println!();
    println!(
        "Average Krippendorff's alpha across {} traits: {:.3}",
        report.traits.len(),
        report.average_alpha
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Ztest {
            successes,
            trials,
            p0,
            alternative,
            continuity_correction,
            format,
        } => {
            let result =
                one_sample_proportion_ztest(successes, trials, p0, alternative, continuity_correction)?;
            match format {
                OutputFormat::Text => print_ztest(&result),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Sweep {
            successes,
            trials,
            alpha,
            alternative,
            continuity_correction,
            p0_min,
            p0_max,
            step,
            format,
        } => {
            let params = SweepParams {
                alpha,
                alternative,
                continuity_correction,
                p0_min,
                p0_max,
                step,
            };
            let crossing = find_threshold_crossing(successes, trials, &params)?;
            match format {
                OutputFormat::Text => print_crossing(crossing),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&crossing)?),
            }
        }
        Command::Agreement {
            comments,
            seed,
            format,
        } => {
            let data = generate_annotations(comments, seed);
            let report = agreement_report(&data)?;
            match format {
                OutputFormat::Text => print_agreement(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Report {
            comments,
            seed,
            format,
        } => {
            let report = build_study_report(comments, seed)?;
            match format {
                OutputFormat::Text => print!("{}", render_text(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }

    Ok(())
}
