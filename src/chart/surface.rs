//! Rendering surfaces owned by one chart.
//!
//! A [`ChartTarget`] bundles the four surfaces a chart draws into. Each
//! surface only supports full replacement of its contents, so a redraw
//! can never leave geometry from an earlier call behind.

use crate::models::Point;
use serde::{Deserialize, Serialize};

/// Root visual of a chart; carries the entrance animation designation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRoot {
    animation: Option<Animation>,
    generation: u64,
}

/// An animation currently applied to a chart root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub duration_ms: u64,
}

impl ChartRoot {
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Draw generation of the most recent draw on this chart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    pub(crate) fn set_animation(&mut self, animation: Animation) {
        self.animation = Some(animation);
    }

    pub(crate) fn clear_animation(&mut self) {
        self.animation = None;
    }
}

/// Sink for the open polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    points: Vec<Point>,
}

/// Sink for the closed fill/clip polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillPolygon {
    points: Vec<Point>,
}

macro_rules! point_sink {
    ($ty:ty) => {
        impl $ty {
            pub fn points(&self) -> &[Point] {
                &self.points
            }

            /// Replace all points.
            pub fn set_points(&mut self, points: Vec<Point>) {
                self.points = points;
            }
        }
    };
}

point_sink!(LineGeometry);
point_sink!(FillPolygon);

/// One text node on the x-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelNode {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Container of axis label nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisContainer {
    children: Vec<LabelNode>,
}

impl AxisContainer {
    pub fn children(&self) -> &[LabelNode] {
        &self.children
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: LabelNode) {
        self.children.push(node);
    }
}

/// The four surfaces of one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartTarget {
    pub root: ChartRoot,
    pub line: LineGeometry,
    pub fill: FillPolygon,
    pub axis: AxisContainer,
}

impl ChartTarget {
    pub fn new() -> Self {
        Self::default()
    }
}
