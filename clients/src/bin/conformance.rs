//! `cayley-conformance` - Validates the Cayley enumerator against known results.
//!
//! Runs the complete conformance suite across:
//! - Fixture tables (groups and near-misses with expected verdicts)
//! - Reference counts of labelled group tables for small orders
//!
//! **Usage:**
//! ```
//! cayley-conformance [--max-order <n>] [--full] [--json]
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

use anyhow::Result;
use cayley_conformance::validators::counts::MAX_REFERENCE_ORDER;
use cayley_conformance::{run_all, Severity, SuiteOptions, DEFAULT_MAX_ORDER};
use clap::Parser;

/// Run the Cayley conformance suite.
#[derive(Parser)]
#[command(
    name = "cayley-conformance",
    about = "Validate the Cayley enumerator against known tables and counts"
)]
struct Args {
    /// Enumerate every order up to this one.
    #[arg(long, default_value_t = DEFAULT_MAX_ORDER)]
    max_order: usize,

    /// Include every order with a reference count (order 4 sweeps 2³² tables).
    #[arg(long, conflicts_with = "max_order")]
    full: bool,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    cayley_clients::init_logging();
    let args = Args::parse();

    let options = SuiteOptions {
        max_order: if args.full {
            MAX_REFERENCE_ORDER
        } else {
            args.max_order
        },
    };

    let report = run_all(&options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.all_passed() {
            process::exit(1);
        }
        return Ok(());
    }

    // Print results
    println!("Cayley Conformance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {} - {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(&Severity::Pass);
    let warned = report.count(&Severity::Warning);
    let failed = report.failure_count();

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
