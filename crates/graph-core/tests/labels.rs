// File: crates/graph-core/tests/labels.rs
// Purpose: Validate the gridline label inversion rule.

use graph_core::grid::row_label;

#[test]
fn rows_count_down_from_the_ceiling() {
    let labels: Vec<String> = (0..=6).map(|row| row_label(row, 6)).collect();
    assert_eq!(labels, vec!["6", "5", "4", "3", "2", "1", "0"]);
}

#[test]
fn top_row_reads_max_bottom_row_reads_zero() {
    assert_eq!(row_label(0, 6), "6");
    assert_eq!(row_label(6, 6), "0");
    assert_eq!(row_label(0, 1), "1");
    assert_eq!(row_label(1, 1), "0");
}
