//! Viewport constants shared by the chart components.

/// Number of plotted positions on every chart.
pub const SLOTS: usize = 4;

/// X position of each data point.
pub const SLOT_X: [f64; SLOTS] = [10.0, 80.0, 160.0, 230.0];

/// X position of each axis label.
pub const LABEL_X: [f64; SLOTS] = [0.0, 70.0, 140.0, 210.0];

/// Y of the largest value (top of the plotting range).
pub const Y_TOP: f64 = 5.0;

/// Y of a zero value (bottom of the plotting range).
pub const Y_BOTTOM: f64 = 105.0;

/// Y of the baseline the fill polygon is closed against.
pub const BASELINE_Y: f64 = 110.0;

/// Y of every axis label.
pub const LABEL_Y: f64 = 120.0;

/// Full viewport size (width, height) used when rasterizing a chart.
pub const VIEWPORT_SIZE: (u32, u32) = (240, 130);
