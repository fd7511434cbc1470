//! Identity element search: `f(e, x) == f(x, e) == x` for every x.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{assert_same_order, CheckResult, IdentityResult};
use crate::symbols::{Symbol, SymbolSet};
use crate::table::Table;

/// The last `(candidate, element)` pair examined by a failed identity search.
///
/// Only the last candidate is disproved by this pair; it is a debugging aid,
/// not a counterexample for the whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityWitness {
    /// The last candidate identity tried.
    pub candidate: Symbol,
    /// The element on which that candidate failed.
    pub element: Symbol,
}

impl fmt::Display for IdentityWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(e = {}, x = {})", self.candidate, self.element)
    }
}

/// Searches for a two-sided identity element.
///
/// Candidates are tried in ascending order and the first one that fixes
/// every element on both sides is returned, so the result is the smallest
/// identity when several exist.
///
/// # Panics
///
/// Panics if the table and symbol set have different orders.
///
/// # Examples
///
/// ```
/// use cayley::{check_identity, SymbolSet, Table};
///
/// let symbols = SymbolSet::new(4).unwrap();
/// let table = Table::from_rows(&[[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]]).unwrap();
/// assert_eq!(check_identity(&table, &symbols).valid(), Some(3));
/// ```
#[must_use]
pub fn check_identity(table: &Table, symbols: &SymbolSet) -> IdentityResult {
    assert_same_order(table, symbols);
    let mut last = IdentityWitness {
        candidate: 0,
        element: 0,
    };
    for e in symbols.iter() {
        match symbols
            .iter()
            .find(|&x| table.get(e, x) != x || table.get(x, e) != x)
        {
            None => return CheckResult::Valid(e),
            Some(x) => {
                last = IdentityWitness {
                    candidate: e,
                    element: x,
                }
            }
        }
    }
    CheckResult::Invalid(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(n: usize) -> SymbolSet {
        SymbolSet::new(n).unwrap()
    }

    #[test]
    fn z3_identity_is_zero() {
        let table = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
        assert_eq!(check_identity(&table, &symbols(3)), CheckResult::Valid(0));
    }

    #[test]
    fn z4_and_klein_identity_is_zero() {
        let z4 = Table::from_rows(&[[0, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]])
            .unwrap();
        let v4 = Table::from_rows(&[[0, 1, 2, 3], [1, 3, 0, 2], [2, 0, 3, 1], [3, 2, 1, 0]])
            .unwrap();
        assert_eq!(check_identity(&z4, &symbols(4)).valid(), Some(0));
        assert_eq!(check_identity(&v4, &symbols(4)).valid(), Some(0));
    }

    #[test]
    fn identity_need_not_be_the_first_symbol() {
        let table = Table::from_rows(&[[1, 0], [0, 1]]).unwrap();
        assert_eq!(check_identity(&table, &symbols(2)), CheckResult::Valid(1));
    }

    #[test]
    fn missing_identity_reports_last_candidate() {
        // Constant operation: nothing is an identity.
        let table = Table::from_rows(&[[0, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(
            check_identity(&table, &symbols(3)),
            CheckResult::Invalid(IdentityWitness {
                candidate: 2,
                element: 1
            })
        );
    }

    #[test]
    fn one_sided_identity_is_rejected() {
        // Right-zero semigroup f(a, b) = b: every element is a left identity only.
        let table = Table::from_rows(&[[0, 1], [0, 1]]).unwrap();
        assert!(!check_identity(&table, &symbols(2)).is_valid());
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let table = Table::cyclic(&symbols(5));
        let first = check_identity(&table, &symbols(5));
        assert_eq!(first, check_identity(&table, &symbols(5)));
    }
}
