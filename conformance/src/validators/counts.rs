//! Reference count validator.
//!
//! Enumerates the full table space for small orders and compares the number
//! of group tables with the known labelled counts. Sequential and parallel
//! runs must agree.

use anyhow::Result;
use cayley::{CountOptions, GroupCounter, SymbolSet};
use tracing::info;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "counts";

/// Number of group tables on `{0, …, n−1}`, indexed by n.
///
/// Each abstract group G of order n contributes `n! / |Aut(G)|` tables:
/// order 4 has Z4 (24 / 2) and the Klein four-group (24 / 6).
pub const REFERENCE_COUNTS: [u64; 5] = [0, 1, 2, 3, 16];

/// Largest order with a reference count.
pub const MAX_REFERENCE_ORDER: usize = REFERENCE_COUNTS.len() - 1;

/// Validates the group counts for orders `1..=max_order`.
///
/// Orders above [`MAX_REFERENCE_ORDER`] are reported as warnings.
///
/// # Errors
///
/// Returns an error only if a symbol set cannot be built.
pub fn validate(max_order: usize) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for order in 1..=max_order {
        let Some(&expected) = REFERENCE_COUNTS.get(order) else {
            report.push(TestResult::warn(
                VALIDATOR,
                format!("order {order}: no reference count, skipped"),
            ));
            continue;
        };

        let symbols = SymbolSet::new(order)?;
        info!(order, "counting group tables");
        let sequential = GroupCounter::new(symbols).run(|_| {});
        let parallel = GroupCounter::new(symbols)
            .with_options(CountOptions {
                parallel: true,
                ..CountOptions::default()
            })
            .run(|_| {});

        let mut problems = Vec::new();
        if sequential.count != expected {
            problems.push(format!(
                "sequential count {} != reference {expected}",
                sequential.count
            ));
        }
        if parallel != sequential {
            problems.push(format!(
                "parallel report (count {}, examined {}) differs from sequential (count {}, examined {})",
                parallel.count, parallel.examined, sequential.count, sequential.examined
            ));
        }
        if sequential.count + sequential.rejected.total() != sequential.examined {
            problems.push("accepted + rejected != examined".to_string());
        }

        if problems.is_empty() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!(
                    "order {order}: {} group tables among {} examined",
                    sequential.count, sequential.examined
                ),
            ));
        } else {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("order {order}: count mismatch"),
                problems,
            ));
        }
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn small_orders_match_reference() {
        let report = validate(3).unwrap();
        assert_eq!(report.results.len(), 3);
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn zero_max_order_checks_nothing() {
        let report = validate(0).unwrap();
        assert!(report.results.is_empty());
        assert_eq!(REFERENCE_COUNTS[MAX_REFERENCE_ORDER], 16);
    }
}
