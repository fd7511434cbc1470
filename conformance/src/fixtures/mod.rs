//! Named Cayley table fixtures with their expected classification.
//!
//! Each fixture holds the rows of a table over `{0, …, n−1}` and the verdict
//! the checkers must reach. Group tables live in [`groups`], tables that
//! violate exactly one axiom in [`near_misses`].

pub mod groups;
pub mod near_misses;

/// The classification a fixture must receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A group with the given identity element.
    Group {
        /// Expected identity.
        identity: u8,
    },
    /// Rejected by the associativity check.
    NotAssociative,
    /// Associative, but without a two-sided identity.
    NoIdentity,
    /// Associative with identity, but some element lacks an inverse.
    NoInverse,
}

/// A named table and its expected verdict.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short identifier used in report lines.
    pub name: &'static str,
    /// Table rows; entry `[a][b]` is `f(a, b)`.
    pub rows: &'static [&'static [usize]],
    /// Expected classification.
    pub expected: Expected,
}

/// Every fixture, groups first.
pub fn all() -> Vec<Fixture> {
    groups::FIXTURES
        .iter()
        .chain(near_misses::FIXTURES)
        .copied()
        .collect()
}
