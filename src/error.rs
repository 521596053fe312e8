//! Error types for chart drawing.

use thiserror::Error;

/// Errors raised by a single chart draw.
///
/// A draw error is local to the chart it was raised for; batch operations
/// such as [`crate::Dashboard::init_charts`] report it and keep going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// No chart target is mounted under the requested analytic key.
    #[error("no chart target mounted for analytic key `{key}`")]
    MissingTarget { key: String },

    /// A series or label set does not fill exactly the viewport slots.
    #[error("{what} has {actual} entries, the viewport has {expected} slots")]
    InvalidSeriesLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value that cannot be placed on the chart (NaN, infinite or negative).
    #[error("value {value} at slot {index} cannot be plotted")]
    InvalidValue { index: usize, value: f64 },
}

/// Result alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
