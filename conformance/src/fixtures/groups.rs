//! Group tables, including relabelings whose identity is not 0.

use super::{Expected, Fixture};

/// The trivial group.
pub const TRIVIAL: Fixture = Fixture {
    name: "trivial",
    rows: &[&[0]],
    expected: Expected::Group { identity: 0 },
};

/// Z2 with identity 1.
pub const Z2_SWAPPED: Fixture = Fixture {
    name: "z2-swapped",
    rows: &[&[1, 0], &[0, 1]],
    expected: Expected::Group { identity: 1 },
};

/// Z3, addition mod 3.
pub const Z3: Fixture = Fixture {
    name: "z3",
    rows: &[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]],
    expected: Expected::Group { identity: 0 },
};

/// Z4, addition mod 4.
pub const Z4: Fixture = Fixture {
    name: "z4",
    rows: &[&[0, 1, 2, 3], &[1, 2, 3, 0], &[2, 3, 0, 1], &[3, 0, 1, 2]],
    expected: Expected::Group { identity: 0 },
};

/// Z4 relabeled so that 3 is the identity.
pub const Z4_SHIFTED: Fixture = Fixture {
    name: "z4-shifted",
    rows: &[&[1, 2, 3, 0], &[2, 3, 0, 1], &[3, 0, 1, 2], &[0, 1, 2, 3]],
    expected: Expected::Group { identity: 3 },
};

/// Z4 generated by 1 with 1·1 = 3.
pub const Z4_ALTERNATE: Fixture = Fixture {
    name: "z4-alternate",
    rows: &[&[0, 1, 2, 3], &[1, 3, 0, 2], &[2, 0, 3, 1], &[3, 2, 1, 0]],
    expected: Expected::Group { identity: 0 },
};

/// The Klein four-group Z2 × Z2.
pub const KLEIN_FOUR: Fixture = Fixture {
    name: "klein-four",
    rows: &[&[0, 1, 2, 3], &[1, 0, 3, 2], &[2, 3, 0, 1], &[3, 2, 1, 0]],
    expected: Expected::Group { identity: 0 },
};

/// Symmetric group S3 as permutations in the order
/// `id, (0 1), (0 2), (1 2), (0 1 2), (0 2 1)`.
pub const S3: Fixture = Fixture {
    name: "s3",
    rows: &[
        &[0, 1, 2, 3, 4, 5],
        &[1, 0, 4, 5, 2, 3],
        &[2, 5, 0, 4, 3, 1],
        &[3, 4, 5, 0, 1, 2],
        &[4, 3, 1, 2, 5, 0],
        &[5, 2, 3, 1, 0, 4],
    ],
    expected: Expected::Group { identity: 0 },
};

/// All group fixtures.
pub const FIXTURES: &[Fixture] = &[
    TRIVIAL,
    Z2_SWAPPED,
    Z3,
    Z4,
    Z4_SHIFTED,
    Z4_ALTERNATE,
    KLEIN_FOUR,
    S3,
];
