//! Group counting over the whole table space.
//!
//! [`GroupCounter`] drives the [`Tables`] enumerator through [`check_group`]
//! and tallies the tables that define a group. The only state carried across
//! tables is the running count (plus the diagnostic tallies of a
//! [`CountReport`]); each table is classified independently.
//!
//! # Parallel runs
//!
//! The table space splits into `n^n` slices, one per possible first row.
//! With [`CountOptions::parallel`] each slice is scanned on the rayon pool
//! and the partial reports are reduced in slice order, which is enumeration
//! order, so the count and the accepted tables match a sequential run.
//!
//! # Limits
//!
//! [`CountOptions::limit`] stops the run once that many groups are found.
//! Workers share one atomic counter and check it between tables; a limited
//! parallel run therefore never reports more than `limit` groups, but which
//! groups it reports can differ from the sequential run.

use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::group::{check_group, GroupVerdict, Rejection};
use crate::symbols::SymbolSet;
use crate::table::Table;
use crate::tables::{table_count, Tables};
use crate::tuples::enumerate_tuples;

/// Table spaces larger than this are logged as impractical before a run.
const PRACTICAL_TABLE_COUNT: u128 = 10_000_000_000;

/// Settings for a counting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Scan first-row slices on the rayon thread pool.
    pub parallel: bool,
    /// Stop after this many groups have been found.
    pub limit: Option<u64>,
    /// Keep the accepted tables in the report.
    pub collect_tables: bool,
}

/// Number of tables rejected by each axiom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionTally {
    /// Rejected by the associativity check.
    pub associativity: u64,
    /// Associative, but without an identity element.
    pub identity: u64,
    /// Associative with identity, but some element lacks an inverse.
    pub inverse: u64,
}

impl RejectionTally {
    /// Counts one rejection.
    pub fn record(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::Associativity { .. } => self.associativity += 1,
            Rejection::Identity { .. } => self.identity += 1,
            Rejection::Inverse { .. } => self.inverse += 1,
        }
    }

    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.associativity += other.associativity;
        self.identity += other.identity;
        self.inverse += other.inverse;
    }

    /// Total rejected tables.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.associativity + self.identity + self.inverse
    }
}

/// Outcome of a counting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// Order n of the enumerated tables.
    pub order: usize,
    /// Number of tables that define a group.
    pub count: u64,
    /// Number of tables classified.
    pub examined: u64,
    /// Rejections per axiom.
    pub rejected: RejectionTally,
    /// Accepted tables in enumeration order, when collection was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
    /// True if the run ended on the limit before exhausting the space.
    pub stopped_early: bool,
}

impl CountReport {
    fn empty(order: usize) -> Self {
        Self {
            order,
            count: 0,
            examined: 0,
            rejected: RejectionTally::default(),
            tables: Vec::new(),
            stopped_early: false,
        }
    }

    fn merge(&mut self, other: Self) {
        self.count += other.count;
        self.examined += other.examined;
        self.rejected.merge(&other.rejected);
        self.tables.extend(other.tables);
        self.stopped_early |= other.stopped_early;
    }
}

/// Counts the tables of one order that define a group.
///
/// # Examples
///
/// ```
/// use cayley::{CountOptions, GroupCounter, SymbolSet};
///
/// let symbols = SymbolSet::new(2).unwrap();
/// let report = GroupCounter::new(symbols)
///     .with_options(CountOptions { collect_tables: true, ..CountOptions::default() })
///     .run(|table| println!("valid group {table}"));
/// assert_eq!(report.count, 2);
/// assert_eq!(report.examined, 16);
/// assert_eq!(report.tables[0].to_string(), "[[0, 1], [1, 0]]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GroupCounter {
    symbols: SymbolSet,
    options: CountOptions,
}

impl GroupCounter {
    /// A sequential, unlimited counter over the symbol set.
    #[must_use]
    pub fn new(symbols: SymbolSet) -> Self {
        Self {
            symbols,
            options: CountOptions::default(),
        }
    }

    /// Replaces the run options.
    #[must_use]
    pub fn with_options(mut self, options: CountOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this counter runs with.
    #[must_use]
    pub const fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Enumerates the table space, calling `on_group` with every accepted
    /// table in enumeration order.
    pub fn run(&self, mut on_group: impl FnMut(&Table)) -> CountReport {
        let order = self.symbols.order();
        match table_count(order) {
            Some(total) if total <= PRACTICAL_TABLE_COUNT => {
                debug!(order, total = %total, options = ?self.options, "starting group enumeration");
            }
            total => warn!(
                order,
                total = ?total,
                "table space is beyond practical enumeration; this run will not finish in reasonable time"
            ),
        }

        let report = if self.options.parallel {
            self.run_parallel(&mut on_group)
        } else {
            let found = AtomicU64::new(0);
            self.scan(
                Tables::new(&self.symbols),
                &found,
                self.options.collect_tables,
                &mut on_group,
            )
        };

        debug!(
            order,
            count = report.count,
            examined = report.examined,
            stopped_early = report.stopped_early,
            "group enumeration finished"
        );
        report
    }

    fn run_parallel(&self, on_group: &mut impl FnMut(&Table)) -> CountReport {
        let found = AtomicU64::new(0);
        let slices: Vec<_> = enumerate_tuples(&self.symbols).collect();
        debug!(slices = slices.len(), "scanning first-row slices in parallel");

        // Accepted tables are always gathered so `on_group` sees them in order.
        let partials: Vec<CountReport> = slices
            .into_par_iter()
            .map(|first_row| {
                let tables = Tables::from_prefix(&self.symbols, vec![first_row]);
                self.scan(tables, &found, true, &mut |_: &Table| {})
            })
            .collect();

        let mut report = CountReport::empty(self.symbols.order());
        for partial in partials {
            report.merge(partial);
        }
        for table in &report.tables {
            on_group(table);
        }
        if !self.options.collect_tables {
            report.tables.clear();
        }
        report
    }

    /// Classifies every table from `tables`, stopping early once `found`
    /// reaches the limit.
    fn scan(
        &self,
        tables: Tables,
        found: &AtomicU64,
        collect: bool,
        on_group: &mut impl FnMut(&Table),
    ) -> CountReport {
        let limit = self.options.limit;
        let mut report = CountReport::empty(self.symbols.order());
        for table in tables {
            if limit.is_some_and(|k| found.load(Ordering::Relaxed) >= k) {
                report.stopped_early = true;
                break;
            }
            report.examined += 1;
            match check_group(&table, &self.symbols) {
                GroupVerdict::Group { identity } => {
                    let previous = found.fetch_add(1, Ordering::Relaxed);
                    if limit.is_some_and(|k| previous >= k) {
                        // Another worker claimed the last slot.
                        report.stopped_early = true;
                        break;
                    }
                    trace!(%table, identity, "valid group");
                    report.count += 1;
                    on_group(&table);
                    if collect {
                        report.tables.push(table);
                    }
                }
                GroupVerdict::Rejected(rejection) => report.rejected.record(&rejection),
            }
        }
        report
    }
}

/// Counts the tables over the symbol set that define a group.
///
/// Distinct tables are counted separately even when they describe the same
/// abstract group.
///
/// ```
/// use cayley::{count_groups, SymbolSet};
///
/// assert_eq!(count_groups(&SymbolSet::new(1).unwrap()), 1);
/// assert_eq!(count_groups(&SymbolSet::new(3).unwrap()), 3);
/// ```
#[must_use]
pub fn count_groups(symbols: &SymbolSet) -> u64 {
    GroupCounter::new(*symbols).run(|_| {}).count
}

/// Lazily yields every table over the symbol set that defines a group, in
/// enumeration order.
pub fn groups(symbols: &SymbolSet) -> impl Iterator<Item = Table> + '_ {
    Tables::new(symbols).filter(move |table| check_group(table, symbols).is_group())
}
