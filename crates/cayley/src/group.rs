//! The per-table group pipeline.
//!
//! [`check_group`] applies the three axiom checkers in increasing cost order
//! and stops at the first failure:
//!
//! ```text
//! associativity ──fail──▶ Rejected(Associativity)
//!      │ ok
//! identity ──────fail──▶ Rejected(Identity)
//!      │ e
//! inverse(e) ────fail──▶ Rejected(Inverse)
//!      │ ok
//! Group { identity: e }
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::check::{
    check_associativity, check_identity, check_inverse, CheckResult, IdentityWitness, Triple,
};
use crate::symbols::{Symbol, SymbolSet};
use crate::table::Table;

/// Which axiom rejected a table, with that check's witness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axiom", rename_all = "snake_case")]
pub enum Rejection {
    /// `f(f(a, b), c) != f(a, f(b, c))` for the witness triple.
    Associativity {
        /// The first failing triple.
        witness: Triple,
    },
    /// No two-sided identity exists.
    Identity {
        /// Diagnostic only: the last candidate tried and where it failed.
        witness: IdentityWitness,
    },
    /// Some element has no inverse with respect to `identity`.
    Inverse {
        /// The identity found by the previous check.
        identity: Symbol,
        /// The first element without an inverse.
        element: Symbol,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Associativity { witness } => {
                write!(f, "not associative at {witness}")
            }
            Self::Identity { witness } => write!(f, "no identity element (last tried {witness})"),
            Self::Inverse { identity, element } => {
                write!(f, "{element} has no inverse for identity {identity}")
            }
        }
    }
}

/// Classification of a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupVerdict {
    /// All three axioms hold.
    Group {
        /// The identity element.
        identity: Symbol,
    },
    /// An axiom failed.
    Rejected(Rejection),
}

impl GroupVerdict {
    /// Returns true if the table defines a group.
    #[inline]
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// The identity element, if the table defines a group.
    #[must_use]
    pub const fn identity(&self) -> Option<Symbol> {
        match self {
            Self::Group { identity } => Some(*identity),
            Self::Rejected(_) => None,
        }
    }
}

impl fmt::Display for GroupVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { identity } => write!(f, "group with identity {identity}"),
            Self::Rejected(rejection) => write!(f, "not a group: {rejection}"),
        }
    }
}

/// Classifies a table: associativity first, then identity, then inverses.
///
/// # Panics
///
/// Panics if the table and symbol set have different orders.
///
/// # Examples
///
/// ```
/// use cayley::{check_group, GroupVerdict, SymbolSet, Table};
///
/// let symbols = SymbolSet::new(3).unwrap();
/// let z3 = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
/// assert_eq!(check_group(&z3, &symbols), GroupVerdict::Group { identity: 0 });
/// ```
#[must_use]
pub fn check_group(table: &Table, symbols: &SymbolSet) -> GroupVerdict {
    if let CheckResult::Invalid(witness) = check_associativity(table, symbols) {
        return GroupVerdict::Rejected(Rejection::Associativity { witness });
    }
    let identity = match check_identity(table, symbols) {
        CheckResult::Valid(e) => e,
        CheckResult::Invalid(witness) => {
            return GroupVerdict::Rejected(Rejection::Identity { witness })
        }
    };
    if let CheckResult::Invalid(element) = check_inverse(table, symbols, identity) {
        return GroupVerdict::Rejected(Rejection::Inverse { identity, element });
    }
    GroupVerdict::Group { identity }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_z4_is_a_group_with_identity_three() {
        let symbols = SymbolSet::from_symbols(&[0, 1, 2, 3]).unwrap();
        let table =
            Table::from_rows(&[[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]]).unwrap();
        assert_eq!(check_group(&table, &symbols), GroupVerdict::Group { identity: 3 });
    }

    #[test]
    fn trivial_group() {
        let symbols = SymbolSet::new(1).unwrap();
        let table = Table::from_rows(&[[0]]).unwrap();
        assert_eq!(check_group(&table, &symbols), GroupVerdict::Group { identity: 0 });
    }

    #[test]
    fn rejection_names_the_first_failing_axiom() {
        let symbols = SymbolSet::new(2).unwrap();

        let not_associative = Table::from_rows(&[[1, 0], [0, 0]]).unwrap();
        assert!(matches!(
            check_group(&not_associative, &symbols),
            GroupVerdict::Rejected(Rejection::Associativity { .. })
        ));

        let no_identity = Table::from_rows(&[[0, 0], [0, 0]]).unwrap();
        assert!(matches!(
            check_group(&no_identity, &symbols),
            GroupVerdict::Rejected(Rejection::Identity { .. })
        ));

        let no_inverse = Table::from_rows(&[[0, 1], [1, 1]]).unwrap();
        assert_eq!(
            check_group(&no_inverse, &symbols),
            GroupVerdict::Rejected(Rejection::Inverse {
                identity: 0,
                element: 1
            })
        );
    }

    #[test]
    fn verdict_serializes_with_axiom_tag() {
        let verdict = GroupVerdict::Rejected(Rejection::Inverse {
            identity: 0,
            element: 1,
        });
        let json = serde_json::to_value(verdict).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rejected": {"axiom": "inverse", "identity": 0, "element": 1}})
        );
    }
}
