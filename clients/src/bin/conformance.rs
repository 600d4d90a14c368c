//! `yijing-conformance` - Validates the Yijing tables against their known counts.
//!
//! Runs the complete conformance suite across:
//! - Lookup tables and nuclear convergence
//! - Classification partitions
//! - Sequences and glyphs
//! - The standard genetic code
//!
//! **Usage:**
//! ```
//! yijing-conformance [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use yijing_clients::logging::{self, TracingConfig};
use yijing_conformance::run_all;

/// Run the Yijing conformance suite.
#[derive(Parser)]
#[command(
    name = "yijing-conformance",
    about = "Validate the Yijing lookup tables, partitions, sequences and genetic code"
)]
struct Args {
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log each validator at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&TracingConfig::from_env().verbose(args.verbose))
        .context("installing the tracing subscriber")?;

    let report = run_all()?;
    let summary = report.summary();

    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{text}");
    } else {
        println!("Yijing Conformance Report");
        println!("=========================");
        println!();

        for result in &report.results {
            println!(
                "[{}] {} - {}",
                result.severity.tag(),
                result.validator,
                result.message
            );
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            summary.passed, summary.warned, summary.failed
        );
    }

    if summary.failed > 0 {
        eprintln!(
            "Conformance FAILED: {} check(s) did not pass.",
            summary.failed
        );
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
