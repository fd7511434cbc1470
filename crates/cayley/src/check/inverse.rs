//! Inverses: every a has some a′ with `f(a, a′) == f(a′, a) == e`.

use super::{assert_same_order, CheckResult, InverseResult};
use crate::symbols::{Symbol, SymbolSet};
use crate::table::Table;

/// Decides whether every element has a two-sided inverse with respect to
/// `identity`.
///
/// Only existence is required; an element may have several inverses. The
/// scan stops at the first element with none, which becomes the witness.
///
/// # Panics
///
/// Panics if the table and symbol set have different orders, or `identity`
/// is not a member of the symbol set.
///
/// # Examples
///
/// ```
/// use cayley::{check_inverse, SymbolSet, Table};
///
/// let symbols = SymbolSet::new(3).unwrap();
/// let z3 = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
/// assert!(check_inverse(&z3, &symbols, 0).is_valid());
/// ```
#[must_use]
pub fn check_inverse(table: &Table, symbols: &SymbolSet, identity: Symbol) -> InverseResult {
    assert_same_order(table, symbols);
    assert!(
        symbols.contains(identity as usize),
        "identity {identity} is outside the symbol set of order {}",
        symbols.order()
    );
    for a in symbols.iter() {
        let has_inverse = symbols
            .iter()
            .any(|b| table.get(a, b) == identity && table.get(b, a) == identity);
        if !has_inverse {
            return CheckResult::Invalid(a);
        }
    }
    CheckResult::Valid(())
}
