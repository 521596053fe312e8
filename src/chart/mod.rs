//! Sparkline chart engine: fixed four-slot viewport, line + filled area.
//!
//! - [`scale`]: values to viewport points
//! - [`path`]: polyline and fill polygon
//! - [`axis`]: x-axis label regeneration
//! - [`animate`]: entrance animation that clears itself per draw generation
//! - [`surface`]: the surfaces a chart draws into

pub mod animate;
pub mod axis;
pub mod path;
pub mod scale;
pub mod surface;
pub mod types;

pub use animate::{AnimationTicket, DrawAnimator};
pub use path::{Geometry, build_geometry};
pub use scale::{scale, scale_series};
pub use surface::{AxisContainer, ChartRoot, ChartTarget, FillPolygon, LabelNode, LineGeometry};
pub use types::SLOTS;

use crate::models::{LabelSet, Series};

/// Redraw `target` from scratch: geometry and labels are fully replaced.
///
/// Stamps the root with `generation`, which the caller must never reuse for
/// the same chart key. Does not animate.
pub fn redraw(target: &mut ChartTarget, labels: &LabelSet, series: &Series, generation: u64) {
    let points = scale_series(series);
    let Geometry { line, fill } = build_geometry(&points);
    target.line.set_points(line);
    target.fill.set_points(fill);
    axis::relabel(&mut target.axis, labels);
    target.root.set_generation(generation);
}
