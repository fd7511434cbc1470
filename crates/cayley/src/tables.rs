//! Enumeration of the full table space of order n.
//!
//! Every n×n table is one element of the Cartesian product of n row spaces,
//! each row space being the `n^n` tuples of [`Tuples`]. [`Tables`] drives one
//! restartable row enumerator per row and carries between them like the
//! wheels of an odometer: the last row turns fastest, the first row slowest.
//!
//! ```text
//! order 2 (16 tables):
//!   [[0,0],[0,0]]  [[0,0],[0,1]]  [[0,0],[1,0]]  [[0,0],[1,1]]
//!   [[0,1],[0,0]]  ...                            [[1,1],[1,1]]
//! ```
//!
//! The space is the whole function space `S × S → S`, not only Latin squares.

use crate::symbols::SymbolSet;
use crate::table::{Table, TableError};
use crate::tuples::{Tuple, Tuples};

/// Number of tables of order n, `n^(n²)`, or `None` if it overflows `u128`.
///
/// ```
/// assert_eq!(cayley::table_count(2), Some(16));
/// assert_eq!(cayley::table_count(3), Some(19_683));
/// assert_eq!(cayley::table_count(7), None);
/// ```
#[must_use]
pub fn table_count(order: usize) -> Option<u128> {
    let cells = u32::try_from(order.checked_mul(order)?).ok()?;
    (order as u128).checked_pow(cells)
}

/// Lazy enumerator over every table of a given order, optionally restricted
/// to tables whose leading rows are fixed.
#[derive(Debug, Clone)]
pub struct Tables {
    order: usize,
    fixed: usize,
    wheels: Vec<Tuples>,
    rows: Vec<Tuple>,
    exhausted: bool,
}

impl Tables {
    /// Enumerates all `n^(n²)` tables over the symbol set.
    #[must_use]
    pub fn new(symbols: &SymbolSet) -> Self {
        Self::from_prefix(symbols, Vec::new())
    }

    /// Enumerates the tables whose first rows equal `prefix`.
    ///
    /// With a single-row prefix this is one of the `n^n` slices of the table
    /// space used as a unit of parallel work.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the prefix has more than n rows, or a row
    /// is not a valid tuple over the symbol set.
    pub fn with_prefix(symbols: &SymbolSet, prefix: Vec<Tuple>) -> Result<Self, TableError> {
        let order = symbols.order();
        if prefix.len() > order {
            return Err(TableError::OrderMismatch {
                rows: prefix.len(),
                order,
            });
        }
        for (row, entries) in prefix.iter().enumerate() {
            if entries.len() != order {
                return Err(TableError::NotSquare {
                    row,
                    len: entries.len(),
                    order,
                });
            }
            if let Some((col, &value)) = entries
                .iter()
                .enumerate()
                .find(|&(_, &value)| !symbols.contains(value as usize))
            {
                return Err(TableError::OutOfRange {
                    row,
                    col,
                    value: value as usize,
                    order,
                });
            }
        }
        Ok(Self::from_prefix(symbols, prefix))
    }

    /// Prefix rows must already be valid tuples over `symbols`.
    pub(crate) fn from_prefix(symbols: &SymbolSet, prefix: Vec<Tuple>) -> Self {
        let order = symbols.order();
        let fixed = prefix.len();
        let mut wheels = vec![Tuples::over(symbols, order); order - fixed];
        let mut rows = prefix;
        let mut exhausted = false;
        for wheel in &mut wheels {
            match wheel.next() {
                Some(row) => rows.push(row),
                None => exhausted = true,
            }
        }
        Self {
            order,
            fixed,
            wheels,
            rows,
            exhausted,
        }
    }

    /// Side length of the produced tables.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Number of tables this enumerator yields from a fresh start, or `None`
    /// on overflow.
    #[must_use]
    pub fn total(&self) -> Option<u128> {
        let free_cells = u32::try_from((self.order - self.fixed) * self.order).ok()?;
        (self.order as u128).checked_pow(free_cells)
    }

    /// Turns the wheels by one step, carrying into earlier rows. Returns
    /// false once every free row has wrapped.
    fn advance(&mut self) -> bool {
        for (i, wheel) in self.wheels.iter_mut().enumerate().rev() {
            let slot = self.fixed + i;
            if let Some(row) = wheel.next() {
                self.rows[slot] = row;
                return true;
            }
            wheel.restart();
            match wheel.next() {
                Some(row) => self.rows[slot] = row,
                None => return false,
            }
        }
        false
    }
}

impl Iterator for Tables {
    type Item = Table;

    fn next(&mut self) -> Option<Table> {
        if self.exhausted {
            return None;
        }
        let table = Table::from_tuples(&self.rows);
        if !self.advance() {
            self.exhausted = true;
        }
        Some(table)
    }
}

impl core::iter::FusedIterator for Tables {}

/// Enumerates every table over the symbol set, `n^(n²)` in total.
#[must_use]
pub fn enumerate_tables(symbols: &SymbolSet) -> Tables {
    Tables::new(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(n: usize) -> SymbolSet {
        SymbolSet::new(n).unwrap()
    }

    #[test]
    fn counts_match_n_pow_n_squared() {
        assert_eq!(enumerate_tables(&symbols(1)).count(), 1);
        assert_eq!(enumerate_tables(&symbols(2)).count(), 16);
        assert_eq!(enumerate_tables(&symbols(3)).count(), 19_683);
        assert_eq!(enumerate_tables(&symbols(3)).total(), Some(19_683));
    }

    #[test]
    fn earlier_rows_vary_slowest() {
        let tables: Vec<_> = enumerate_tables(&symbols(2)).map(|t| t.to_rows()).collect();
        assert_eq!(tables[0], vec![vec![0, 0], vec![0, 0]]);
        assert_eq!(tables[1], vec![vec![0, 0], vec![0, 1]]);
        assert_eq!(tables[4], vec![vec![0, 1], vec![0, 0]]);
        assert_eq!(tables[15], vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn every_table_is_distinct() {
        let mut tables: Vec<_> = enumerate_tables(&symbols(2)).collect();
        tables.sort_by_key(|t| t.to_rows());
        tables.dedup();
        assert_eq!(tables.len(), 16);
    }

    #[test]
    fn prefix_restricts_the_first_rows() {
        let set = symbols(3);
        let tables: Vec<_> = Tables::with_prefix(&set, vec![vec![2, 0, 1]])
            .unwrap()
            .collect();
        assert_eq!(tables.len(), 729);
        assert!(tables.iter().all(|t| t.row(0) == [2, 0, 1]));
    }

    #[test]
    fn prefixes_partition_the_space() {
        let set = symbols(2);
        let total: usize = Tuples::over(&set, 2)
            .map(|row| Tables::with_prefix(&set, vec![row]).unwrap().count())
            .sum();
        assert_eq!(total, 16);
    }

    #[test]
    fn full_prefix_yields_one_table() {
        let set = symbols(2);
        let mut tables = Tables::with_prefix(&set, vec![vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(tables.total(), Some(1));
        assert_eq!(tables.next().map(|t| t.to_rows()), Some(vec![vec![0, 1], vec![1, 0]]));
        assert!(tables.next().is_none());
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let set = symbols(2);
        assert!(matches!(
            Tables::with_prefix(&set, vec![vec![0, 2]]),
            Err(TableError::OutOfRange { value: 2, .. })
        ));
        assert!(matches!(
            Tables::with_prefix(&set, vec![vec![0]]),
            Err(TableError::NotSquare { .. })
        ));
    }

    #[test]
    fn table_count_overflow() {
        assert_eq!(table_count(4), Some(4_294_967_296));
        assert_eq!(table_count(6), Some(6u128.pow(36)));
        assert_eq!(table_count(7), None);
    }
}
