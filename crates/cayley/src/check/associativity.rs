//! Associativity: `f(f(a, b), c) == f(a, f(b, c))` for every triple.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{assert_same_order, AssociativityResult, CheckResult};
use crate::symbols::{Symbol, SymbolSet};
use crate::table::Table;
use crate::tuples::Tuples;

/// An ordered triple `(a, b, c)` of symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Left operand.
    pub a: Symbol,
    /// Middle operand.
    pub b: Symbol,
    /// Right operand.
    pub c: Symbol,
}

impl Triple {
    /// `f(f(a, b), c)`.
    #[inline]
    #[must_use]
    pub fn left(&self, table: &Table) -> Symbol {
        table.get(table.get(self.a, self.b), self.c)
    }

    /// `f(a, f(b, c))`.
    #[inline]
    #[must_use]
    pub fn right(&self, table: &Table) -> Symbol {
        table.get(self.a, table.get(self.b, self.c))
    }

    /// Returns true if both bracketings agree on this triple.
    #[inline]
    #[must_use]
    pub fn associates(&self, table: &Table) -> bool {
        self.left(table) == self.right(table)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Decides whether the table's operation is associative.
///
/// Triples are scanned in odometer order over the cube `S³`; the first
/// triple on which the two bracketings differ is returned as the witness.
///
/// # Panics
///
/// Panics if the table and symbol set have different orders.
///
/// # Examples
///
/// ```
/// use cayley::{check_associativity, SymbolSet, Table, Triple};
///
/// let symbols = SymbolSet::new(3).unwrap();
/// let table = Table::from_rows(&[[1, 0, 2], [0, 2, 1], [2, 1, 0]]).unwrap();
/// let witness = check_associativity(&table, &symbols).witness().unwrap();
/// assert_eq!(witness, Triple { a: 0, b: 0, c: 1 });
/// assert_ne!(witness.left(&table), witness.right(&table));
/// ```
#[must_use]
pub fn check_associativity(table: &Table, symbols: &SymbolSet) -> AssociativityResult {
    assert_same_order(table, symbols);
    for abc in Tuples::over(symbols, 3) {
        let triple = Triple {
            a: abc[0],
            b: abc[1],
            c: abc[2],
        };
        if !triple.associates(table) {
            return CheckResult::Invalid(triple);
        }
    }
    CheckResult::Valid(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_group_of_order_four_is_associative() {
        let symbols = SymbolSet::from_symbols(&[0, 1, 2, 3]).unwrap();
        let table =
            Table::from_rows(&[[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]]).unwrap();
        assert_eq!(check_associativity(&table, &symbols), CheckResult::Valid(()));
    }

    #[test]
    fn z3_is_associative() {
        let symbols = SymbolSet::new(3).unwrap();
        let table = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
        assert!(check_associativity(&table, &symbols).is_valid());
    }

    #[test]
    fn first_violation_in_odometer_order_is_reported() {
        let symbols = SymbolSet::new(3).unwrap();
        let table = Table::from_rows(&[[1, 0, 2], [0, 2, 1], [2, 1, 0]]).unwrap();
        assert_eq!(
            check_associativity(&table, &symbols),
            CheckResult::Invalid(Triple { a: 0, b: 0, c: 1 })
        );
    }

    #[test]
    fn subtraction_mod_three_is_not_associative() {
        let symbols = SymbolSet::new(3).unwrap();
        let table = Table::from_fn(&symbols, |a, b| (a + 3 - b) % 3);
        let witness = check_associativity(&table, &symbols).witness().unwrap();
        assert_ne!(witness.left(&table), witness.right(&table));
    }

    #[test]
    #[should_panic(expected = "checked against a symbol set of order")]
    fn order_mismatch_panics() {
        let table = Table::from_rows(&[[0, 1], [1, 0]]).unwrap();
        let _ = check_associativity(&table, &SymbolSet::new(3).unwrap());
    }
}
