//! The symbol set `{0, …, n−1}` shared by every table of order n.
//!
//! A [`Symbol`] is both a value of the binary operation and a coordinate into
//! the table. A [`SymbolSet`] is validated on construction, so every consumer
//! can rely on it being a non-empty, contiguous, zero-based range.

use thiserror::Error;

/// An element of the finite set under study.
pub type Symbol = u8;

/// Largest order representable with [`Symbol`] values.
pub const MAX_ORDER: usize = Symbol::MAX as usize + 1;

/// Error when building a [`SymbolSet`] from an explicit list of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The symbol list was empty; groups need at least one element.
    #[error("symbol set must contain at least one symbol")]
    Empty,
    /// The list is not `[0, 1, …, n−1]`.
    #[error("symbol set is not a zero-based contiguous range: found {found} at position {position}")]
    NotContiguous {
        /// Position of the first out-of-place symbol.
        position: usize,
        /// The symbol found there.
        found: usize,
    },
    /// The order does not fit in [`Symbol`].
    #[error("order {order} exceeds the maximum supported order {MAX_ORDER}")]
    TooLarge {
        /// The requested order.
        order: usize,
    },
}

/// The ordered, contiguous symbol set `{0, …, n−1}` with `n ≥ 1`.
///
/// # Examples
///
/// ```
/// use cayley::SymbolSet;
///
/// let symbols = SymbolSet::from_symbols(&[0, 1, 2]).unwrap();
/// assert_eq!(symbols.order(), 3);
/// assert_eq!(symbols.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
///
/// assert!(SymbolSet::from_symbols(&[0, 2]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSet {
    order: usize,
}

impl SymbolSet {
    /// Creates the symbol set of the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Empty`] for order 0 and
    /// [`SymbolError::TooLarge`] above [`MAX_ORDER`].
    pub fn new(order: usize) -> Result<Self, SymbolError> {
        if order == 0 {
            return Err(SymbolError::Empty);
        }
        if order > MAX_ORDER {
            return Err(SymbolError::TooLarge { order });
        }
        Ok(Self { order })
    }

    /// Validates an explicit symbol list, which must be exactly `[0, 1, …, n−1]`.
    ///
    /// # Errors
    ///
    /// Returns a [`SymbolError`] describing the first violation.
    pub fn from_symbols(symbols: &[usize]) -> Result<Self, SymbolError> {
        if let Some((position, &found)) = symbols
            .iter()
            .enumerate()
            .find(|&(position, &symbol)| position != symbol)
        {
            return Err(SymbolError::NotContiguous { position, found });
        }
        Self::new(symbols.len())
    }

    /// Number of symbols, n.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns true if `value` is a member of the set.
    #[inline]
    #[must_use]
    pub const fn contains(&self, value: usize) -> bool {
        value < self.order
    }

    /// Iterates the symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + Clone {
        (0..self.order).map(to_symbol)
    }
}

#[inline]
fn to_symbol(index: usize) -> Symbol {
    index as Symbol
}

impl IntoIterator for SymbolSet {
    type Item = Symbol;
    type IntoIter = core::iter::Map<core::ops::Range<usize>, fn(usize) -> Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        (0..self.order).map(to_symbol as fn(usize) -> Symbol)
    }
}
