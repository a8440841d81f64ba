//! Donut chart built from filled wedges and a center hole.

use tracing::instrument;

use crate::palette::Palette;
use crate::scene::{Circle, Path, PathCommand, Point, Primitive, Scene, Style};
use crate::series::Series;

pub const VIEW_SIZE: f64 = 120.0;
pub const CENTER: f64 = 60.0;
pub const OUTER_RADIUS: f64 = 45.0;
pub const HOLE_RADIUS: f64 = 28.0;
pub const HOLE_COLOR: &str = "white";
/// Ring drawn when there is nothing to split.
pub const NEUTRAL_COLOR: &str = "#e4e4e7";
pub const START_ANGLE: f64 = -90.0;

/// One wedge, angles in degrees clockwise from 3 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub value: f64,
    pub start_angle: f64,
    pub sweep: f64,
    pub color: String,
}

impl Segment {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    pub fn is_large_arc(&self) -> bool {
        self.sweep > 180.0
    }
}

/// Splits 360 degrees by weight, starting at 12 o'clock.
///
/// Negative weights count as zero. Returns no segments when the weights do
/// not add up to anything positive.
pub fn segments(series: &Series, colors: Option<&[String]>) -> Vec<Segment> {
    let shares = series.weight_shares();
    if shares.is_empty() {
        return Vec::new();
    }
    let palette = Palette::new(colors);
    let mut angle = START_ANGLE;

    series
        .values()
        .zip(shares)
        .enumerate()
        .map(|(i, (value, share))| {
            let sweep = share * 360.0;
            let segment = Segment {
                value,
                start_angle: angle,
                sweep,
                color: palette.color(i).to_string(),
            };
            angle += sweep;
            segment
        })
        .collect()
}

#[instrument(level = "trace", skip_all, fields(segments = series.len()))]
pub fn render(series: &Series, colors: Option<&[String]>) -> Scene {
    let mut scene = Scene::new(VIEW_SIZE, VIEW_SIZE);
    let center = Point::new(CENTER, CENTER);
    let segments = segments(series, colors);

    if segments.is_empty() {
        scene.push(Primitive::Circle(Circle {
            center,
            radius: OUTER_RADIUS,
            rotation: None,
            style: Style::filled(NEUTRAL_COLOR),
        }));
    }

    for segment in segments.iter().filter(|s| s.sweep > 0.0) {
        scene.push(Primitive::Path(wedge(segment)));
    }

    scene.push(Primitive::Circle(Circle {
        center,
        radius: HOLE_RADIUS,
        rotation: None,
        style: Style::filled(HOLE_COLOR),
    }));
    scene
}

fn wedge(segment: &Segment) -> Path {
    let center = Point::new(CENTER, CENTER);
    let start = point_on_circle(segment.start_angle);
    let mut commands = vec![PathCommand::MoveTo(center), PathCommand::LineTo(start)];

    if segment.sweep >= 360.0 - 1e-9 {
        // An arc whose endpoints coincide draws nothing, so go round in two halves.
        let opposite = point_on_circle(segment.start_angle + 180.0);
        commands.push(PathCommand::Arc { radius: OUTER_RADIUS, large_arc: false, to: opposite });
        commands.push(PathCommand::Arc { radius: OUTER_RADIUS, large_arc: false, to: start });
    } else {
        commands.push(PathCommand::Arc {
            radius: OUTER_RADIUS,
            large_arc: segment.is_large_arc(),
            to: point_on_circle(segment.end_angle()),
        });
    }
    commands.push(PathCommand::Close);

    Path {
        commands,
        style: Style::filled(segment.color.clone()),
    }
}

fn point_on_circle(angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        CENTER + OUTER_RADIUS * rad.cos(),
        CENTER + OUTER_RADIUS * rad.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_customer_segments_sweeps() {
        let segs = segments(&Series::from([28.0, 35.0, 22.0, 15.0]), None);
        let sweeps: Vec<f64> = segs.iter().map(|s| s.sweep).collect();
        for (got, want) in sweeps.iter().zip([100.8, 126.0, 79.2, 54.0]) {
            assert!((got - want).abs() < EPS, "{} != {}", got, want);
        }
        assert!((sweeps.iter().sum::<f64>() - 360.0).abs() < EPS);
        assert_eq!(segs[0].start_angle, -90.0);
        assert!((segs[1].start_angle - 10.8).abs() < EPS);
    }

    #[test]
    fn test_sweeps_are_proportional_to_weight() {
        let series = Series::from([8.0, 6.0, 5.0, 3.0, 2.0]);
        let total = series.sum();
        let segs = segments(&series, None);
        for (seg, value) in segs.iter().zip(series.values()) {
            assert!((seg.sweep - value / total * 360.0).abs() < EPS);
        }
        assert!((segs.iter().map(|s| s.sweep).sum::<f64>() - 360.0).abs() < EPS);
    }

    #[test]
    fn test_large_arc_flag() {
        let scene = render(&Series::from([3.0, 1.0]), None);
        let paths: Vec<_> = scene.paths().collect();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].to_d().contains(" 0 1 1 "));
        assert!(paths[1].to_d().contains(" 0 0 1 "));
    }

    #[test]
    fn test_first_wedge_starts_at_twelve_o_clock() {
        let scene = render(&Series::from([1.0, 1.0]), None);
        let first = scene.paths().next().unwrap();
        assert_eq!(first.to_d(), "M 60 60 L 60 15 A 45 45 0 0 1 60 105 Z");
    }

    #[test]
    fn test_hole_is_drawn_last() {
        let scene = render(&Series::from([28.0, 35.0, 22.0, 15.0]), None);
        match scene.primitives.last().unwrap() {
            Primitive::Circle(hole) => {
                assert_eq!(hole.radius, HOLE_RADIUS);
                assert_eq!(hole.style, Style::filled(HOLE_COLOR));
            }
            other => panic!("expected hole, got {:?}", other),
        }
    }

    #[test]
    fn test_single_full_segment_is_split_in_two_arcs() {
        let scene = render(&Series::from([0.0, 5.0]), None);
        let paths: Vec<_> = scene.paths().collect();
        assert_eq!(paths.len(), 1);
        let arcs = paths[0]
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Arc { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert_eq!(paths[0].style, Style::filled("#3BC77D"));
    }

    #[test]
    fn test_zero_total_renders_neutral_ring() {
        for series in [Series::from([0.0, 0.0]), Series::default(), Series::from([-3.0])] {
            assert!(segments(&series, None).is_empty());
            let scene = render(&series, None);
            assert_eq!(scene.paths().count(), 0);
            let circles: Vec<_> = scene.circles().collect();
            assert_eq!(circles.len(), 2);
            assert_eq!(circles[0].style, Style::filled(NEUTRAL_COLOR));
        }
    }

    #[test]
    fn test_huge_weights_still_fill_the_circle() {
        let series = Series::from([1e308, 1e308]);
        let segs = segments(&series, None);
        assert_eq!(segs.len(), 2);
        assert!((segs[0].sweep - 180.0).abs() < EPS);
        assert!((segs.iter().map(|s| s.sweep).sum::<f64>() - 360.0).abs() < EPS);

        let scene = render(&series, None);
        assert_eq!(scene.paths().count(), 2);
        assert!(scene.paths().all(|p| !p.to_d().contains("NaN")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let series = Series::from([28.0, 35.0, 22.0, 15.0]);
        assert_eq!(render(&series, None), render(&series, None));
    }
}
