//! Vertical bar chart.

use tracing::instrument;

use crate::palette::Palette;
use crate::scene::{Point, Primitive, Rect, Scene, Style};
use crate::series::Series;

pub const VIEW_WIDTH: f64 = 200.0;
pub const VIEW_HEIGHT: f64 = 100.0;
pub const PLOT_WIDTH: f64 = 180.0;
pub const LEFT: f64 = 10.0;
pub const GAP: f64 = 8.0;
pub const BASELINE: f64 = 90.0;
pub const MAX_HEIGHT: f64 = 70.0;
pub const CORNER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Lays out one bar per value, left-aligned with a fixed gap.
///
/// Heights are `value / max` of [`MAX_HEIGHT`], clamped into
/// `[0, MAX_HEIGHT]`. When the maximum is zero or negative every bar is flat.
pub fn layout(series: &Series, colors: Option<&[String]>) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let palette = Palette::new(colors);
    let max = series.max().unwrap_or(0.0);
    let width = (PLOT_WIDTH / series.len() as f64 - GAP).max(0.0);

    series
        .values()
        .enumerate()
        .map(|(i, value)| {
            let height = if max > 0.0 {
                (value / max * MAX_HEIGHT).clamp(0.0, MAX_HEIGHT)
            } else {
                0.0
            };
            Bar {
                x: LEFT + i as f64 * (width + GAP),
                y: BASELINE - height,
                width,
                height,
                color: palette.color(i).to_string(),
            }
        })
        .collect()
}

#[instrument(level = "trace", skip_all, fields(bars = series.len()))]
pub fn render(series: &Series, colors: Option<&[String]>) -> Scene {
    let mut scene = Scene::new(VIEW_WIDTH, VIEW_HEIGHT);
    for bar in layout(series, colors) {
        scene.push(Primitive::Rect(Rect {
            origin: Point::new(bar.x, bar.y),
            width: bar.width,
            height: bar.height,
            corner_radius: CORNER_RADIUS,
            style: Style::filled(bar.color),
        }));
    }
    scene
}
