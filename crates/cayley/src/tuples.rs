//! Odometer enumeration of the Cartesian power of a symbol set.
//!
//! [`Tuples`] yields every ordered tuple of a fixed length whose entries are
//! drawn, with repetition, from `{0, …, radix−1}`. Tuples come out in
//! mixed-radix order: the last position varies fastest, exactly like the
//! digits of a counter.
//!
//! ```text
//! radix 2, length 3:
//!   000 001 010 011 100 101 110 111
//! ```
//!
//! The enumerator is lazy and restartable. Table rows and associativity
//! triples are both driven by it.

use crate::symbols::{Symbol, SymbolSet};

/// An ordered sequence of symbols: a table row or an `(a, b, c)` triple.
pub type Tuple = Vec<Symbol>;

/// Lazy odometer over all `radix^length` tuples.
///
/// # Examples
///
/// ```
/// use cayley::Tuples;
///
/// let all: Vec<_> = Tuples::new(2, 2).collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
///
/// // Length zero has exactly one tuple: the empty one.
/// assert_eq!(Tuples::new(0, 0).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuples {
    radix: usize,
    length: usize,
    next: Option<Tuple>,
}

impl Tuples {
    /// Creates an enumerator over `radix^length` tuples, positioned at the
    /// all-zero tuple.
    #[must_use]
    pub fn new(radix: usize, length: usize) -> Self {
        Self {
            radix,
            length,
            next: Self::first(radix, length),
        }
    }

    /// Tuples of the given length over a symbol set.
    #[must_use]
    pub fn over(symbols: &SymbolSet, length: usize) -> Self {
        Self::new(symbols.order(), length)
    }

    fn first(radix: usize, length: usize) -> Option<Tuple> {
        if length > 0 && radix == 0 {
            None
        } else {
            Some(vec![0; length])
        }
    }

    /// Rewinds to the all-zero tuple.
    pub fn restart(&mut self) {
        self.next = Self::first(self.radix, self.length);
    }

    /// Number of distinct symbols per position.
    #[must_use]
    pub const fn radix(&self) -> usize {
        self.radix
    }

    /// Length of every produced tuple.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Total number of tuples from a fresh start, `radix^length`, or `None`
    /// if that overflows `u128`.
    #[must_use]
    pub fn total(&self) -> Option<u128> {
        let exp = u32::try_from(self.length).ok()?;
        (self.radix as u128).checked_pow(exp)
    }

    /// Advances `tuple` to its odometer successor in place.
    ///
    /// Returns false when the odometer wraps past the last tuple.
    fn advance(&self, tuple: &mut [Symbol]) -> bool {
        for digit in tuple.iter_mut().rev() {
            if (*digit as usize) + 1 < self.radix {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for Tuples {
    type Item = Tuple;

    fn next(&mut self) -> Option<Tuple> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if self.advance(&mut successor) {
            self.next = Some(successor);
        }
        Some(current)
    }
}

impl core::iter::FusedIterator for Tuples {}

/// Enumerates all `n^n` tuples of length n over the symbol set.
///
/// These are the candidate rows of a table of order n.
#[must_use]
pub fn enumerate_tuples(symbols: &SymbolSet) -> Tuples {
    Tuples::over(symbols, symbols.order())
}
