//! Ring gauge for a single percentage.

use std::f64::consts::PI;

use tracing::instrument;

use crate::scene::{Circle, Point, Primitive, Scene, Stroke, Style};

pub const VIEW_SIZE: f64 = 120.0;
pub const CENTER: f64 = 60.0;
pub const RADIUS: f64 = 50.0;
pub const STROKE_WIDTH: f64 = 12.0;
pub const TRACK_COLOR: &str = "#f4f4f5";
pub const ARC_COLOR: &str = "#4E76D0";

/// Measured arc of a gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    /// Percentage after clamping into `[0, 100]`
    pub percentage: f64,
    pub arc_length: f64,
    pub circumference: f64,
}

/// Percentages are clamped into `[0, 100]`; NaN reads as zero.
pub fn gauge(percentage: f64) -> Gauge {
    let percentage = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    let circumference = 2.0 * PI * RADIUS;
    Gauge {
        percentage,
        arc_length: percentage / 100.0 * circumference,
        circumference,
    }
}

#[instrument(level = "trace")]
pub fn render(percentage: f64) -> Scene {
    let gauge = gauge(percentage);
    let center = Point::new(CENTER, CENTER);

    let mut scene = Scene::new(VIEW_SIZE, VIEW_SIZE);
    scene.push(Primitive::Circle(Circle {
        center,
        radius: RADIUS,
        rotation: None,
        style: Style::stroked(Stroke::new(TRACK_COLOR, STROKE_WIDTH)),
    }));
    scene.push(Primitive::Circle(Circle {
        center,
        radius: RADIUS,
        // The dash starts at 3 o'clock; turn it back to 12.
        rotation: Some(-90.0),
        style: Style::stroked(
            Stroke::new(ARC_COLOR, STROKE_WIDTH)
                .dashed(gauge.arc_length, gauge.circumference)
                .round_cap(),
        ),
    }));
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreground_dash(scene: &Scene) -> (f64, f64) {
        let arc = scene.circles().nth(1).unwrap();
        arc.style.stroke.as_ref().unwrap().dash.unwrap()
    }

    #[test]
    fn test_zero_percent_has_zero_length_arc() {
        let g = gauge(0.0);
        assert_eq!(g.arc_length, 0.0);
        assert_eq!(foreground_dash(&render(0.0)).0, 0.0);
    }

    #[test]
    fn test_full_percent_covers_circumference() {
        let g = gauge(100.0);
        assert!((g.arc_length - g.circumference).abs() < 1e-9);
        assert!((g.circumference - 2.0 * PI * 50.0).abs() < 1e-9);
        let (dash, gap) = foreground_dash(&render(100.0));
        assert_eq!(dash, gap);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(gauge(140.0).percentage, 100.0);
        assert_eq!(gauge(-5.0).percentage, 0.0);
        assert_eq!(gauge(f64::NAN).percentage, 0.0);
    }

    #[test]
    fn test_arc_starts_at_twelve_o_clock() {
        let scene = render(75.0);
        assert_eq!(scene.circles().count(), 2);
        let arc = scene.circles().nth(1).unwrap();
        assert_eq!(arc.rotation, Some(-90.0));
        assert_eq!(arc.transform_attr().unwrap(), "rotate(-90 60 60)");
        let (dash, _) = foreground_dash(&scene);
        assert!((dash - 0.75 * 2.0 * PI * 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render(42.0), render(42.0));
    }
}
