//! Maps a [`Series`] onto viewport points.

use super::types::{SLOT_X, Y_BOTTOM, Y_TOP};
use crate::models::{Point, Series};

/// Scale `series` against `max`.
///
/// `y = 105 - 100 * (v / max)`. A zero `max` (all-zero series) falls back to
/// a divisor of 1 so every point sits on the flat bottom line.
pub fn scale(series: &Series, max: f64) -> Vec<Point> {
    let effective_max = if max == 0.0 { 1.0 } else { max };
    let span = Y_BOTTOM - Y_TOP;
    series
        .values()
        .iter()
        .zip(SLOT_X)
        .map(|(&v, x)| Point::new(x, Y_BOTTOM - span * (v / effective_max)))
        .collect()
}

/// Scale against the series' own maximum.
pub fn scale_series(series: &Series) -> Vec<Point> {
    scale(series, series.max())
}
