//! Line and fill geometry built from scaled points.

use super::types::{BASELINE_Y, SLOT_X};
use crate::models::Point;

/// Left anchor of the fill polygon on the baseline.
pub const FILL_START: Point = Point::new(SLOT_X[0], BASELINE_Y);
/// Right anchor of the fill polygon on the baseline.
pub const FILL_END: Point = Point::new(SLOT_X[3], BASELINE_Y);

/// Geometry for one chart: the open polyline and the closed area beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub line: Vec<Point>,
    pub fill: Vec<Point>,
}

/// Build the polyline through `points` and the fill polygon
/// `FILL_START, points.., FILL_END`.
pub fn build_geometry(points: &[Point]) -> Geometry {
    let line = points.to_vec();
    let mut fill = Vec::with_capacity(points.len() + 2);
    fill.push(FILL_START);
    fill.extend_from_slice(points);
    fill.push(FILL_END);
    Geometry { line, fill }
}

/// Serialize points the way an SVG `points` attribute expects them.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_coord(p.x), fmt_coord(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

// Up to two decimals, trailing zeros trimmed.
fn fmt_coord(v: f64) -> String {
    let s = format!("{:.2}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
