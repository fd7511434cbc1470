//! Cayley tables: total binary operations on a symbol set.
//!
//! A [`Table`] of order n stores `f(row, col)` for every pair of symbols in
//! row-major order. Tables are validated when built from caller data; once a
//! `Table` exists, every entry is known to lie in `[0, n)`, so checkers can
//! index without further bounds reasoning.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symbols::{Symbol, SymbolError, SymbolSet};
use crate::tuples::Tuple;

/// Error when building a [`Table`] from caller-supplied rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The row count is not a valid order.
    #[error("invalid table order: {0}")]
    Order(#[from] SymbolError),
    /// The row count differs from the order of the symbol set.
    #[error("table has {rows} rows but the symbol set has order {order}")]
    OrderMismatch {
        /// Number of rows supplied.
        rows: usize,
        /// Order of the symbol set.
        order: usize,
    },
    /// A row does not have exactly n entries.
    #[error("row {row} has {len} entries, expected {order}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// The table order.
        order: usize,
    },
    /// An entry lies outside the symbol set.
    #[error("entry ({row}, {col}) = {value} is outside the symbol set [0, {order})")]
    OutOfRange {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The value found.
        value: usize,
        /// The table order.
        order: usize,
    },
}

/// An n×n operation table, `f(a, b) = table[a][b]`.
///
/// # Examples
///
/// ```
/// use cayley::Table;
///
/// let z3 = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
/// assert_eq!(z3.order(), 3);
/// assert_eq!(z3.get(2, 2), 1);
///
/// // Entries must lie in [0, n).
/// assert!(Table::from_rows(&[[0, 1], [1, 2]]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<Symbol>>")]
pub struct Table {
    order: usize,
    cells: Vec<Symbol>,
}

impl Table {
    /// Builds a table from rows of symbol values, inferring n from the row
    /// count.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if there are no rows, a row is not of length
    /// n, or an entry is not in `[0, n)`.
    pub fn from_rows<R: AsRef<[usize]>>(rows: &[R]) -> Result<Self, TableError> {
        let symbols = SymbolSet::new(rows.len())?;
        Self::with_symbols(&symbols, rows)
    }

    /// Builds a table over an explicit symbol set.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OrderMismatch`] if the row count differs from the
    /// set's order, otherwise the same errors as [`Table::from_rows`].
    pub fn with_symbols<R: AsRef<[usize]>>(
        symbols: &SymbolSet,
        rows: &[R],
    ) -> Result<Self, TableError> {
        let order = symbols.order();
        if rows.len() != order {
            return Err(TableError::OrderMismatch {
                rows: rows.len(),
                order,
            });
        }
        let mut cells = Vec::with_capacity(order * order);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != order {
                return Err(TableError::NotSquare {
                    row,
                    len: entries.len(),
                    order,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                if !symbols.contains(value) {
                    return Err(TableError::OutOfRange {
                        row,
                        col,
                        value,
                        order,
                    });
                }
                cells.push(value as Symbol);
            }
        }
        Ok(Self { order, cells })
    }

    /// Builds the table of `f` over the symbol set.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns a value outside the symbol set.
    pub fn from_fn(symbols: &SymbolSet, f: impl Fn(Symbol, Symbol) -> Symbol) -> Self {
        let order = symbols.order();
        let mut cells = Vec::with_capacity(order * order);
        for a in symbols.iter() {
            for b in symbols.iter() {
                let value = f(a, b);
                assert!(
                    symbols.contains(value as usize),
                    "f({a}, {b}) = {value} is outside the symbol set of order {order}"
                );
                cells.push(value);
            }
        }
        Self { order, cells }
    }

    /// Addition modulo n: the cyclic group of order n with identity 0.
    #[must_use]
    pub fn cyclic(symbols: &SymbolSet) -> Self {
        let order = symbols.order();
        Self::from_fn(symbols, |a, b| ((a as usize + b as usize) % order) as Symbol)
    }

    /// Assembles a table from enumerator rows. Rows are produced over the
    /// same symbol set, so only shape is checked in debug builds.
    pub(crate) fn from_tuples(rows: &[Tuple]) -> Self {
        let order = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == order));
        Self {
            order,
            cells: rows.concat(),
        }
    }

    /// Side length n.
    #[inline]
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Evaluates the operation: `f(a, b)`.
    #[inline]
    #[must_use]
    pub fn get(&self, a: Symbol, b: Symbol) -> Symbol {
        self.cells[a as usize * self.order + b as usize]
    }

    /// Row `a` of the table, i.e. `f(a, ·)`.
    #[must_use]
    pub fn row(&self, a: Symbol) -> &[Symbol] {
        let start = a as usize * self.order;
        &self.cells[start..start + self.order]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> + '_ {
        self.cells.chunks_exact(self.order)
    }

    /// Copies the table into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Symbol>> {
        self.rows().map(<[Symbol]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<usize>>> for Table {
    type Error = TableError;

    fn try_from(rows: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Table> for Vec<Vec<Symbol>> {
    fn from(table: Table) -> Self {
        table.to_rows()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Table{self}")
    }
}
