//! Rasterize a [`ChartTarget`] to **SVG** with Plotters.
//!
//! The viewport (240 x 130) is scaled by an integer factor so fractional
//! point coordinates survive rounding to pixels.

use crate::chart::ChartTarget;
use crate::chart::types::VIEWPORT_SIZE;
use crate::models::Point;
use anyhow::{Context, Result, anyhow, bail};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::path::Path;

/// Line color (#5BC894).
const LINE_COLOR: RGBColor = RGBColor(91, 200, 148);
const LABEL_COLOR: RGBColor = RGBColor(120, 120, 120);
const AREA_OPACITY: f64 = 0.25;
const LABEL_FONT_PX: u32 = 10;

/// Largest accepted pixel scale.
pub const MAX_SCALE: u32 = 64;

/// Render `target` to an SVG document.
///
/// `scale` is clamped up to 1; anything above [`MAX_SCALE`] is an error.
pub fn chart_svg(target: &ChartTarget, scale: u32) -> Result<String> {
    let scale = scale.max(1);
    if scale > MAX_SCALE {
        bail!("scale {} exceeds the maximum of {}", scale, MAX_SCALE);
    }
    let size = (VIEWPORT_SIZE.0 * scale, VIEWPORT_SIZE.1 * scale);
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        draw_target(&root, target, scale)?;
    }
    Ok(buf)
}

/// Render `target` into an SVG file at `path`.
pub fn write_chart_svg<P: AsRef<Path>>(target: &ChartTarget, path: P, scale: u32) -> Result<()> {
    let path = path.as_ref();
    let svg = chart_svg(target, scale)?;
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))
}

fn draw_target<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    target: &ChartTarget,
    scale: u32,
) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let s = scale as f64;
    let to_px = |p: &Point| ((p.x * s).round() as i32, (p.y * s).round() as i32);

    // Area first so the line stays on top.
    let fill: Vec<(i32, i32)> = target.fill.points().iter().map(to_px).collect();
    if fill.len() >= 3 {
        root.draw(&Polygon::new(fill, LINE_COLOR.mix(AREA_OPACITY).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let line: Vec<(i32, i32)> = target.line.points().iter().map(to_px).collect();
    if line.len() >= 2 {
        root.draw(&PathElement::new(line, LINE_COLOR.stroke_width(2 * scale)))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let label_style = TextStyle::from((FontFamily::SansSerif, LABEL_FONT_PX * scale))
        .pos(Pos::new(HPos::Left, VPos::Bottom))
        .color(&LABEL_COLOR);
    for node in target.axis.children() {
        let at = to_px(&Point::new(node.x, node.y));
        root.draw(&Text::new(node.text.as_str(), at, label_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
