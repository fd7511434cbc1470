//! `cayley-count` - Counts the n×n operation tables that define a group.
//!
//! Enumerates all `n^(n²)` tables over `{0, …, n−1}` and prints how many
//! satisfy associativity, identity and inverses. Alternatively classifies a
//! single table given as a JSON matrix.
//!
//! **Usage:**
//! ```
//! cayley-count [--order <n>] [--parallel] [--limit <k>] [--print-tables] [--json]
//! cayley-count --check '[[0,1],[1,0]]'
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::time::Instant;

use anyhow::{Context, Result};
use cayley::{
    check_associativity, check_group, check_identity, check_inverse, CheckResult, CountOptions,
    CountReport, GroupCounter, SymbolSet, Table,
};
use clap::Parser;
use tracing::info;

/// Count the Cayley tables of a given order that define a group.
#[derive(Parser)]
#[command(
    name = "cayley-count",
    about = "Exhaustively count the operation tables that define a group"
)]
struct Args {
    /// Number of symbols n; the table space has n^(n²) elements.
    #[arg(long, short = 'n', default_value_t = 3)]
    order: usize,

    /// Scan first-row slices of the table space in parallel.
    #[arg(long)]
    parallel: bool,

    /// Stop after this many groups have been found.
    #[arg(long)]
    limit: Option<u64>,

    /// Print every accepted table.
    #[arg(long)]
    print_tables: bool,

    /// Emit the result as JSON.
    #[arg(long)]
    json: bool,

    /// Classify a single table given as a JSON matrix instead of counting.
    #[arg(long, value_name = "MATRIX", conflicts_with_all = ["order", "parallel", "limit", "print_tables"])]
    check: Option<String>,
}

fn main() -> Result<()> {
    cayley_clients::init_logging();
    let args = Args::parse();

    match &args.check {
        Some(matrix) => classify(matrix, args.json),
        None => count(&args),
    }
}

fn count(args: &Args) -> Result<()> {
    let symbols = SymbolSet::new(args.order).context("invalid --order")?;
    let options = CountOptions {
        parallel: args.parallel,
        limit: args.limit,
        collect_tables: args.json && args.print_tables,
    };
    info!(order = args.order, ?options, "counting group tables");

    let start = Instant::now();
    let print_each = args.print_tables && !args.json;
    let report = GroupCounter::new(symbols)
        .with_options(options)
        .run(|table| {
            if print_each {
                println!("valid group {table}");
            }
        });
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
        println!("--- {:.3} seconds ---", elapsed.as_secs_f64());
    }
    Ok(())
}

fn print_summary(report: &CountReport) {
    println!(
        "Order {}: {} group table(s) among {} examined",
        report.order, report.count, report.examined
    );
    println!(
        "Rejected: {} not associative, {} without identity, {} without inverses",
        report.rejected.associativity, report.rejected.identity, report.rejected.inverse
    );
    if report.stopped_early {
        println!("Stopped early at the group limit.");
    }
}

fn classify(matrix: &str, json: bool) -> Result<()> {
    let table: Table = serde_json::from_str(matrix).context("--check expects an n×n JSON matrix")?;
    let symbols = SymbolSet::new(table.order())?;
    let verdict = check_group(&table, &symbols);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    println!("Table {table} (order {})", table.order());
    match check_associativity(&table, &symbols) {
        CheckResult::Valid(()) => println!("  associativity: holds"),
        CheckResult::Invalid(t) => println!(
            "  associativity: fails at {t}: f(f(a,b),c) = {} but f(a,f(b,c)) = {}",
            t.left(&table),
            t.right(&table)
        ),
    }
    match check_identity(&table, &symbols) {
        CheckResult::Valid(e) => {
            println!("  identity:      {e}");
            match check_inverse(&table, &symbols, e) {
                CheckResult::Valid(()) => println!("  inverses:      every element has one"),
                CheckResult::Invalid(a) => println!("  inverses:      {a} has none"),
            }
        }
        CheckResult::Invalid(w) => println!("  identity:      none (last tried {w})"),
    }
    println!("Verdict: {verdict}");
    Ok(())
}
