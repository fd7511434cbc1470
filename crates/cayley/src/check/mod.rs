//! Axiom checkers for the three group laws.
//!
//! Each checker is a pure, total decision procedure over a [`Table`] and
//! returns a [`CheckResult`]: either the value the check establishes or a
//! witness that reproduces the failure.
//!
//! | Checker | Valid | Invalid witness | Cost |
//! |---------|-------|-----------------|------|
//! | [`check_associativity`] | `()` | first failing [`Triple`] | O(n³) |
//! | [`check_identity`] | the identity `e` | [`IdentityWitness`] (diagnostic) | O(n²) |
//! | [`check_inverse`] | `()` | first element without an inverse | O(n²) |
//!
//! [`Table`]: crate::Table

mod associativity;
mod identity;
mod inverse;

use serde::{Deserialize, Serialize};

use crate::symbols::{Symbol, SymbolSet};
use crate::table::Table;

pub use associativity::{check_associativity, Triple};
pub use identity::{check_identity, IdentityWitness};
pub use inverse::check_inverse;

/// Outcome of a single axiom check.
///
/// The witness is only reachable on the `Invalid` branch and the established
/// value only on the `Valid` branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult<V, W> {
    /// The axiom holds; carries what the check established.
    Valid(V),
    /// The axiom fails; carries a counterexample.
    Invalid(W),
}

impl<V, W> CheckResult<V, W> {
    /// Returns true if the axiom holds.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The established value, if valid.
    #[must_use]
    pub fn valid(self) -> Option<V> {
        match self {
            Self::Valid(v) => Some(v),
            Self::Invalid(_) => None,
        }
    }

    /// The witness, if invalid.
    #[must_use]
    pub fn witness(self) -> Option<W> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(w) => Some(w),
        }
    }
}

/// Result of [`check_associativity`].
pub type AssociativityResult = CheckResult<(), Triple>;

/// Result of [`check_identity`]: the identity element or a diagnostic witness.
pub type IdentityResult = CheckResult<Symbol, IdentityWitness>;

/// Result of [`check_inverse`]: the first element lacking an inverse.
pub type InverseResult = CheckResult<(), Symbol>;

/// Checkers are only defined for a table over the given symbol set.
#[inline]
#[track_caller]
fn assert_same_order(table: &Table, symbols: &SymbolSet) {
    assert_eq!(
        table.order(),
        symbols.order(),
        "table of order {} checked against a symbol set of order {}",
        table.order(),
        symbols.order()
    );
}
