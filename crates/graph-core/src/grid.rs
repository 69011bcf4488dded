// File: crates/graph-core/src/grid.rs
// Summary: Gridline row helpers.

/// Label text for gridline row `row` (0 = top). Rows count down from the
/// ceiling, so the top line reads `max_value` and the bottom line reads 0.
pub fn row_label(row: i32, max_value: i32) -> String {
    (row - max_value).abs().to_string()
}
