// File: crates/graph-core/src/error.rs
// Summary: Configuration errors raised before any drawing occurs.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertical ceiling must be at least 1; it divides the chart height
    /// into gridline steps.
    #[error("max value must be at least 1, got {0}")]
    InvalidMaxValue(i32),

    /// The data list divides the chart width into columns and may not be empty.
    #[error("graph has no data points")]
    EmptyData,
}
