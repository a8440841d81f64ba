//! Line chart with a gradient-filled area underneath.
//!
//! The same mapping backs two layouts: the compact chat-card chart with
//! point markers, and the stretched area chart used by report trend cards.

use tracing::instrument;

use crate::scene::{Circle, LinearGradient, Point, Polygon, Polyline, Primitive, Scene, Stroke, Style};
use crate::series::Series;

/// Geometry and styling of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    /// y of the highest value
    pub top: f64,
    /// y of the lowest value
    pub baseline: f64,
    /// y where the area polygon is closed
    pub fill_floor: f64,
    pub color: String,
    pub stroke_width: f64,
    /// Radius of the per-point markers, `None` for no markers
    pub marker_radius: Option<f64>,
    pub gradient_id: String,
    /// Gradient opacity at the top and at the bottom
    pub fade: (f64, f64),
    pub stretch: bool,
}

impl LineLayout {
    /// 200x100 chart with markers, as shown inside chat cards.
    pub fn card() -> Self {
        Self {
            width: 200.0,
            height: 100.0,
            top: 20.0,
            baseline: 80.0,
            fill_floor: 80.0,
            color: "#3BC77D".to_string(),
            stroke_width: 2.0,
            marker_radius: Some(3.0),
            gradient_id: "lineGradient".to_string(),
            fade: (0.3, 0.0),
            stretch: false,
        }
    }

    /// Stretched area chart 100 units wide with 10 units of vertical padding.
    pub fn area(color: &str, height: f64) -> Self {
        let padding = 10.0;
        Self {
            width: 100.0,
            height,
            top: padding,
            baseline: height - padding,
            fill_floor: height,
            color: color.to_string(),
            stroke_width: 2.0,
            marker_radius: None,
            gradient_id: format!("gradient-{}", color.trim_start_matches('#')),
            fade: (0.3, 0.05),
            stretch: true,
        }
    }
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::card()
    }
}

/// Series values projected into view-box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub points: Vec<Point>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

/// Projects the series onto the layout.
///
/// A single value is placed mid-width; a flat series sits on the baseline.
pub fn plot(series: &Series, layout: &LineLayout) -> LinePlot {
    let Some(extent) = series.extent() else {
        return LinePlot { points: Vec::new(), min: 0.0, max: 0.0, range: 1.0 };
    };

    let span = layout.baseline - layout.top;
    let project_y = |value: f64| layout.baseline - extent.fraction(value) * span;

    let points = if series.len() == 1 {
        vec![Point::new(layout.width / 2.0, project_y(series.value(0)))]
    } else {
        let last = (series.len() - 1) as f64;
        series
            .values()
            .enumerate()
            .map(|(i, value)| Point::new(i as f64 / last * layout.width, project_y(value)))
            .collect()
    };

    LinePlot {
        points,
        min: extent.min,
        max: extent.max,
        range: extent.range,
    }
}

#[instrument(level = "trace", skip_all, fields(points = series.len()))]
pub fn render(series: &Series, layout: &LineLayout) -> Scene {
    let plot = plot(series, layout);
    let mut scene = Scene::new(layout.width, layout.height);
    if layout.stretch {
        scene = scene.stretched();
    }

    match plot.points.as_slice() {
        [] => {}
        [only] => {
            scene.push(marker(*only, layout.marker_radius.unwrap_or(layout.stroke_width), &layout.color));
        }
        points => {
            let (from, to) = layout.fade;
            scene.add_gradient(LinearGradient::fade(layout.gradient_id.clone(), &layout.color, from, to));

            let mut area = Vec::with_capacity(points.len() + 2);
            area.push(Point::new(0.0, layout.fill_floor));
            area.extend_from_slice(points);
            area.push(Point::new(layout.width, layout.fill_floor));
            scene.push(Primitive::Polygon(Polygon {
                points: area,
                style: Style::gradient(layout.gradient_id.clone()),
            }));

            let base = Stroke::new(layout.color.clone(), layout.stroke_width);
            let stroke = if layout.stretch {
                base.non_scaling()
            } else {
                base.round_cap().round_join()
            };
            scene.push(Primitive::Polyline(Polyline {
                points: points.to_vec(),
                style: Style::stroked(stroke),
            }));

            if let Some(radius) = layout.marker_radius {
                for point in points {
                    scene.push(marker(*point, radius, &layout.color));
                }
            }
        }
    }
    scene
}

fn marker(center: Point, radius: f64, color: &str) -> Primitive {
    Primitive::Circle(Circle {
        center,
        radius,
        rotation: None,
        style: Style::filled(color),
    })
}
