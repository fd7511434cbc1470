//! Fixture table validator.
//!
//! Classifies every named fixture with `check_group` and compares the verdict
//! with the fixture's expectation. For rejected tables the reported witness
//! is re-evaluated against the table.

use anyhow::{Context, Result};
use cayley::{check_group, GroupVerdict, Rejection, SymbolSet, Table};

use crate::fixtures::{self, Expected, Fixture};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "fixtures";

/// Validates every fixture in [`fixtures::all`].
///
/// # Errors
///
/// Returns an error if a fixture is not a well-formed table.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for fixture in fixtures::all() {
        report.push(validate_fixture(&fixture)?);
    }
    Ok(report)
}

/// Classifies one fixture and compares the verdict with its expectation.
///
/// # Errors
///
/// Returns an error if the fixture rows do not form a valid table.
pub fn validate_fixture(fixture: &Fixture) -> Result<TestResult> {
    let table = Table::from_rows(fixture.rows)
        .with_context(|| format!("fixture `{}` is not a valid table", fixture.name))?;
    let symbols = SymbolSet::new(table.order())?;
    let verdict = check_group(&table, &symbols);

    if !matches_expectation(&verdict, fixture.expected) {
        return Ok(TestResult::fail_with_details(
            VALIDATOR,
            format!("{}: unexpected verdict", fixture.name),
            vec![
                format!("expected: {:?}", fixture.expected),
                format!("actual:   {verdict}"),
                format!("table:    {table}"),
            ],
        ));
    }

    if let Some(problem) = witness_problem(&table, &verdict) {
        return Ok(TestResult::fail_with_details(
            VALIDATOR,
            format!("{}: witness does not reproduce", fixture.name),
            vec![problem],
        ));
    }

    Ok(TestResult::pass(
        VALIDATOR,
        format!("{} (order {}): {verdict}", fixture.name, table.order()),
    ))
}

fn matches_expectation(verdict: &GroupVerdict, expected: Expected) -> bool {
    match (verdict, expected) {
        (GroupVerdict::Group { identity }, Expected::Group { identity: e }) => *identity == e,
        (GroupVerdict::Rejected(Rejection::Associativity { .. }), Expected::NotAssociative) => {
            true
        }
        (GroupVerdict::Rejected(Rejection::Identity { .. }), Expected::NoIdentity) => true,
        (GroupVerdict::Rejected(Rejection::Inverse { .. }), Expected::NoInverse) => true,
        _ => false,
    }
}

/// Re-checks a rejection witness directly against the table.
fn witness_problem(table: &Table, verdict: &GroupVerdict) -> Option<String> {
    match verdict {
        GroupVerdict::Group { .. } => None,
        GroupVerdict::Rejected(Rejection::Associativity { witness }) => {
            (witness.left(table) == witness.right(table))
                .then(|| format!("triple {witness} associates"))
        }
        GroupVerdict::Rejected(Rejection::Identity { witness }) => {
            let (e, x) = (witness.candidate, witness.element);
            (table.get(e, x) == x && table.get(x, e) == x)
                .then(|| format!("candidate {e} fixes {x} on both sides"))
        }
        GroupVerdict::Rejected(Rejection::Inverse { identity, element }) => table
            .row(*element)
            .iter()
            .enumerate()
            .find(|&(b, &ab)| ab == *identity && table.get(b as u8, *element) == *identity)
            .map(|(b, _)| format!("{element} has inverse {b}")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_passes() {
        let report = validate().unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "fixture failures: {:#?}", failures);
        assert_eq!(report.results.len(), fixtures::all().len());
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let fixture = Fixture {
            name: "z3-mislabelled",
            rows: &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]],
            expected: Expected::Group { identity: 1 },
        };
        let result = validate_fixture(&fixture).unwrap();
        assert!(result.is_failure());
        assert_eq!(result.details.len(), 3);
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let fixture = Fixture {
            name: "out-of-range",
            rows: &[&[0, 2], &[1, 0]],
            expected: Expected::NotAssociative,
        };
        assert!(validate_fixture(&fixture).is_err());
    }
}
