//! Classic group tables and near-misses, checked end to end.
//!
//! Several tables follow the Wikibooks "Abstract Algebra/Group tables" page.

use cayley::{
    check_associativity, check_group, check_identity, check_inverse, count_groups, CheckResult,
    CountOptions, GroupCounter, GroupVerdict, Rejection, SymbolSet, Table, TableError, Triple,
};

fn symbols(n: usize) -> SymbolSet {
    SymbolSet::new(n).unwrap()
}

// ============================================================================
// Individual checkers
// ============================================================================

#[test]
fn shifted_cyclic_four_has_identity_three() {
    let set = SymbolSet::from_symbols(&[0, 1, 2, 3]).unwrap();
    let table = Table::with_symbols(
        &set,
        &[[1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]],
    )
    .unwrap();

    assert!(check_associativity(&table, &set).is_valid());
    assert_eq!(check_identity(&table, &set), CheckResult::Valid(3));
    assert!(check_inverse(&table, &set, 3).is_valid());
    assert!(check_group(&table, &set).is_group());
}

#[test]
fn entry_outside_symbol_set_fails_fast() {
    let set = SymbolSet::from_symbols(&[0, 1, 2, 3]).unwrap();
    let result = Table::with_symbols(
        &set,
        &[[1, 2, 3, 0], [2, 4, 0, 1], [3, 0, 1, 2], [0, 1, 2, 3]],
    );
    assert!(matches!(
        result,
        Err(TableError::OutOfRange {
            row: 1,
            col: 1,
            value: 4,
            ..
        })
    ));
}

#[test]
fn cyclic_three_is_a_group_with_identity_zero() {
    let table = Table::from_rows(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]).unwrap();
    assert!(check_associativity(&table, &symbols(3)).is_valid());
    assert_eq!(check_identity(&table, &symbols(3)).valid(), Some(0));
    assert!(check_inverse(&table, &symbols(3), 0).is_valid());
}

#[test]
fn non_associative_three_reports_reproducible_witness() {
    let table = Table::from_rows(&[[1, 0, 2], [0, 2, 1], [2, 1, 0]]).unwrap();
    let result = check_associativity(&table, &symbols(3));
    assert_eq!(result, CheckResult::Invalid(Triple { a: 0, b: 0, c: 1 }));

    let witness = result.witness().unwrap();
    assert_eq!(witness.left(&table), 2);
    assert_eq!(witness.right(&table), 1);
}

#[test]
fn cyclic_four_and_klein_four() {
    let z4 = Table::from_rows(&[[0, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]]).unwrap();
    let v4 = Table::from_rows(&[[0, 1, 2, 3], [1, 0, 3, 2], [2, 3, 0, 1], [3, 2, 1, 0]]).unwrap();
    assert_eq!(check_group(&z4, &symbols(4)), GroupVerdict::Group { identity: 0 });
    assert_eq!(check_group(&v4, &symbols(4)), GroupVerdict::Group { identity: 0 });
}

#[test]
fn identity_found_in_table_with_rearranged_rows() {
    let table = Table::from_rows(&[[0, 1, 2, 3], [1, 3, 0, 2], [2, 0, 3, 1], [3, 2, 1, 0]]).unwrap();
    assert_eq!(check_identity(&table, &symbols(4)).valid(), Some(0));
}

#[test]
fn identity_is_its_own_inverse() {
    for n in 1..=5 {
        let set = symbols(n);
        let table = Table::cyclic(&set);
        assert_eq!(table.get(0, 0), 0);
        assert!(check_inverse(&table, &set, 0).is_valid());
    }
}

#[test]
fn monoid_without_inverses_is_rejected_on_inverse() {
    // Multiplication mod 3: associative, identity 1, but 0 has no inverse.
    let set = symbols(3);
    let table = Table::from_fn(&set, |a, b| (a * b) % 3);
    assert_eq!(
        check_group(&table, &set),
        GroupVerdict::Rejected(Rejection::Inverse {
            identity: 1,
            element: 0
        })
    );
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn order_one_counts_the_trivial_group() {
    assert_eq!(count_groups(&symbols(1)), 1);
}

#[test]
fn order_three_reference_count() {
    assert_eq!(count_groups(&symbols(3)), 3);
}

#[test]
fn counted_groups_include_cyclic_table() {
    let set = symbols(3);
    let report = GroupCounter::new(set)
        .with_options(CountOptions {
            collect_tables: true,
            ..CountOptions::default()
        })
        .run(|_| {});
    assert!(report.tables.contains(&Table::cyclic(&set)));
    assert!(report
        .tables
        .iter()
        .all(|t| check_group(t, &set).is_group()));
}

#[test]
fn rejection_tally_for_order_two() {
    let report = GroupCounter::new(symbols(2)).run(|_| {});
    assert_eq!(report.count, 2);
    assert_eq!(report.examined, 16);
    // 8 of the 16 binary operations on two elements are associative.
    assert_eq!(report.rejected.associativity, 8);
    assert_eq!(report.rejected.total(), 14);
}

#[test]
fn report_serializes_to_json() {
    let report = GroupCounter::new(symbols(2))
        .with_options(CountOptions {
            collect_tables: true,
            ..CountOptions::default()
        })
        .run(|_| {});
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["tables"][1], serde_json::json!([[1, 0], [0, 1]]));
}
