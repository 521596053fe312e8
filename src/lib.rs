//! dashviz
//!
//! Inline analytics charts for a dashboard page: sparkline-style line + area
//! plots on a fixed four-slot viewport, plus the loader and loading bar
//! state that go with them. Pairs with the `dashviz` CLI.
//!
//! ### Features
//! - Scale a four-value series onto the viewport (flat baseline for all-zero data)
//! - Build the polyline and the filled area polygon under it
//! - Regenerate x-axis labels on every draw
//! - Entrance animation that clears itself, keyed to the draw generation
//! - Four-stage cyclic loader and per-session loading bar
//! - Render any chart to SVG
//!
//! ### Example
//! ```no_run
//! use dashviz::{Dashboard, DashboardConfig};
//! use std::time::Duration;
//!
//! let mut dash = Dashboard::with_default_charts(DashboardConfig::default());
//! let labels = ["30m", "25m", "20m", "15m"];
//! let report = dash.init_charts(&labels, &[1.0, 3.0, 2.0, 5.0], &[0.0; 4], &[4.0, 4.0, 1.0, 0.0]);
//! assert!(report.is_complete());
//!
//! // the scheduled refresh of `employee` fires after 1.5s
//! dash.advance(Duration::from_millis(1500));
//! let svg = dashviz::render::chart_svg(dash.target("employee").unwrap(), 2)?;
//! std::fs::write("employee.svg", svg)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod activity;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod loading_bar;
pub mod models;
pub mod render;
pub mod schedule;
pub mod storage;
pub mod visibility;

pub use chart::ChartTarget;
pub use config::DashboardConfig;
pub use dashboard::{BatchReport, Dashboard, Task};
pub use error::ChartError;
pub use loader::{LoaderState, LoaderStepper};
pub use models::{ChartData, LabelSet, Point, Series};
