//! Cayley conformance suite.
//!
//! This crate checks the `cayley` enumerator against ground truth that does
//! not depend on the enumerator itself: hand-written tables with known
//! classifications, and the known number of labelled group tables for small
//! orders.
//!
//! # Conformance Scope
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `fixtures` | Named group tables and near-misses get the expected verdict; witnesses reproduce |
//! | `counts` | `count_groups` equals the reference count; parallel and sequential runs agree |
//!
//! # Entry Point
//!
//! ```no_run
//! use cayley_conformance::{run_all, SuiteOptions};
//!
//! let report = run_all(&SuiteOptions::default()).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Largest order enumerated by default. Order 4 has 2³² tables and is
/// opt-in.
pub const DEFAULT_MAX_ORDER: usize = 3;

/// Options for a conformance run.
#[derive(Debug, Clone, Copy)]
pub struct SuiteOptions {
    /// Enumerate every order up to and including this one.
    pub max_order: usize,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Fixture tables (per-table verdicts and witnesses)
/// 2. Reference counts for orders `1..=max_order`
///
/// # Errors
///
/// Returns an error only if a fixture is malformed.
pub fn run_all(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Fixture tables
    report.extend(validators::fixtures::validate()?);

    // 2. Reference counts
    report.extend(validators::counts::validate(options.max_order)?);

    Ok(report)
}

#[cfg(test)]
mod tests_unit {
    use super::*;

    #[test]
    fn default_suite_passes() {
        let report = run_all(&SuiteOptions::default());
        let report = match report {
            Ok(report) => report,
            Err(err) => unreachable!("suite failed to run: {err:#}"),
        };
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .collect();
        assert!(
            failures.is_empty(),
            "conformance failures: {:#?}",
            failures
        );
    }

    #[test]
    fn report_serializes() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("fixtures", "z3"));
        let json = serde_json::to_value(&report).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "results": [{"validator": "fixtures", "message": "z3", "severity": "pass"}]
            }))
        );
    }
}
