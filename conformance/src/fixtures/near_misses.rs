//! Tables that fail exactly one axiom.

use super::{Expected, Fixture};

/// A commutative Latin square that is not associative.
pub const LATIN_NON_ASSOCIATIVE: Fixture = Fixture {
    name: "latin-non-associative",
    rows: &[&[1, 0, 2], &[0, 2, 1], &[2, 1, 0]],
    expected: Expected::NotAssociative,
};

/// Subtraction mod 3.
pub const SUBTRACTION_MOD_3: Fixture = Fixture {
    name: "subtraction-mod-3",
    rows: &[&[0, 2, 1], &[1, 0, 2], &[2, 1, 0]],
    expected: Expected::NotAssociative,
};

/// Constant operation: associative, no identity.
pub const CONSTANT: Fixture = Fixture {
    name: "constant",
    rows: &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]],
    expected: Expected::NoIdentity,
};

/// `f(a, b) = b`: every element is a left identity, none is two-sided.
pub const RIGHT_ZERO: Fixture = Fixture {
    name: "right-zero",
    rows: &[&[0, 1], &[0, 1]],
    expected: Expected::NoIdentity,
};

/// Multiplication mod 3: a monoid in which 0 has no inverse.
pub const MULTIPLICATION_MOD_3: Fixture = Fixture {
    name: "multiplication-mod-3",
    rows: &[&[0, 0, 0], &[0, 1, 2], &[0, 2, 1]],
    expected: Expected::NoInverse,
};

/// `max` on `{0, 1, 2}`: identity 0, nothing else is invertible.
pub const MAX: Fixture = Fixture {
    name: "max",
    rows: &[&[0, 1, 2], &[1, 1, 2], &[2, 2, 2]],
    expected: Expected::NoInverse,
};

/// All near-miss fixtures.
pub const FIXTURES: &[Fixture] = &[
    LATIN_NON_ASSOCIATIVE,
    SUBTRACTION_MOD_3,
    CONSTANT,
    RIGHT_ZERO,
    MULTIPLICATION_MOD_3,
    MAX,
];
