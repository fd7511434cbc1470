//! Cayley - exhaustive group enumeration over operation tables
//!
//! For a symbol set `S = {0, …, n−1}`, every function `S × S → S` can be
//! written down as an n×n **Cayley table**. This crate walks the entire space
//! of `n^(n²)` such tables and decides, for each one, whether it defines a
//! group. It is a brute-force reference: no Latin-square pruning, no
//! order theorems, no isomorphism reduction.
//!
//! # Pipeline
//!
//! ```text
//! SymbolSet ─▶ Tuples ─▶ Tables ─▶ GroupCounter ─▶ count
//!                 │                    │
//!                 └── (a, b, c) ──▶ associativity ─▶ identity ─▶ inverse
//! ```
//!
//! The checkers run in increasing cost order and the first failure rejects
//! the table:
//!
//! | Axiom | Law | Cost |
//! |-------|-----|------|
//! | Associativity | `f(f(a,b),c) = f(a,f(b,c))` | n³ |
//! | Identity | `f(e,x) = f(x,e) = x` | n² |
//! | Inverse | `f(a,a′) = f(a′,a) = e` | n² |
//!
//! # Table Space
//!
//! | n | Tables | Groups |
//! |---|--------|--------|
//! | 1 | 1 | 1 |
//! | 2 | 16 | 2 |
//! | 3 | 19 683 | 3 |
//! | 4 | 4 294 967 296 | 16 |
//!
//! Groups are counted per table: relabelings of the same abstract group are
//! distinct tables and are counted separately.
//!
//! # Example
//!
//! ```
//! use cayley::{check_group, count_groups, GroupVerdict, SymbolSet, Table};
//!
//! let symbols = SymbolSet::from_symbols(&[0, 1, 2, 3]).unwrap();
//! let table = Table::with_symbols(
//!     &symbols,
//!     &[[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]],
//! )
//! .unwrap();
//! assert_eq!(check_group(&table, &symbols), GroupVerdict::Group { identity: 3 });
//!
//! assert_eq!(count_groups(&SymbolSet::new(3).unwrap()), 3);
//! ```
//!
//! # Preconditions
//!
//! Malformed inputs never reach a checker. [`SymbolSet`] and [`Table`]
//! validate on construction and return [`SymbolError`] / [`TableError`];
//! a table with an entry outside `[0, n)` is an error, not "not a group".

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![deny(missing_docs)]

// Symbol set {0, …, n−1}
pub mod symbols;

// Odometer enumeration of tuples
pub mod tuples;

// Validated operation tables
pub mod table;

// Enumeration of the table space
pub mod tables;

// Associativity, identity and inverse checkers
pub mod check;

// Composed per-table classification
pub mod group;

// Sequential and parallel group counting
pub mod counter;

pub use check::{
    check_associativity, check_identity, check_inverse, AssociativityResult, CheckResult,
    IdentityResult, IdentityWitness, InverseResult, Triple,
};
pub use counter::{count_groups, groups, CountOptions, CountReport, GroupCounter, RejectionTally};
pub use group::{check_group, GroupVerdict, Rejection};
pub use symbols::{Symbol, SymbolError, SymbolSet, MAX_ORDER};
pub use table::{Table, TableError};
pub use tables::{enumerate_tables, table_count, Tables};
pub use tuples::{enumerate_tuples, Tuple, Tuples};

/// Prelude module for convenient imports.
///
/// ```
/// use cayley::prelude::*;
///
/// let symbols = SymbolSet::new(2).unwrap();
/// assert_eq!(count_groups(&symbols), 2);
/// ```
pub mod prelude {
    pub use crate::check::{check_associativity, check_identity, check_inverse, CheckResult};
    pub use crate::counter::{count_groups, CountOptions, CountReport, GroupCounter};
    pub use crate::group::{check_group, GroupVerdict, Rejection};
    pub use crate::symbols::{Symbol, SymbolSet};
    pub use crate::table::Table;
    pub use crate::tables::enumerate_tables;
    pub use crate::tuples::enumerate_tuples;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_tables_are_groups_for_every_small_order() {
        for n in 1..=8 {
            let symbols = SymbolSet::new(n).unwrap();
            let table = Table::cyclic(&symbols);
            assert_eq!(
                check_group(&table, &symbols),
                GroupVerdict::Group { identity: 0 },
                "Z{n} rejected"
            );
        }
    }

    #[test]
    fn cyclic_table_is_among_the_counted_groups() {
        for n in 1..=3 {
            let symbols = SymbolSet::new(n).unwrap();
            let cyclic = Table::cyclic(&symbols);
            assert!(groups(&symbols).any(|t| t == cyclic), "Z{n} not enumerated");
        }
    }

    #[test]
    fn trivial_table_is_the_only_group_of_order_one() {
        let symbols = SymbolSet::new(1).unwrap();
        let all: Vec<_> = groups(&symbols).collect();
        assert_eq!(all, vec![Table::from_rows(&[[0]]).unwrap()]);
    }
}
