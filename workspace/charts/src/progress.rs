//! Horizontal progress tracks, one per value.

use tracing::instrument;

use crate::palette::Palette;
use crate::scene::{Point, Primitive, Rect, Scene, Style, Text, TextAnchor};
use crate::series::Series;
use crate::svg::format_number;

pub const TRACK_WIDTH: f64 = 200.0;
pub const TRACK_HEIGHT: f64 = 8.0;
pub const ROW_HEIGHT: f64 = 28.0;
pub const TRACK_COLOR: &str = "#f4f4f5";
const TEXT_BASELINE: f64 = 12.0;
const TRACK_OFFSET: f64 = 18.0;
const TEXT_SIZE: f64 = 11.0;
const TEXT_COLOR: &str = "#52525b";

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrack {
    pub label: String,
    /// The value as given, shown next to the track
    pub value: f64,
    /// Filled share of the track in `[0, 1]`
    pub fill_fraction: f64,
    pub color: String,
}

impl ProgressTrack {
    pub fn value_text(&self) -> String {
        format!("{}%", format_number(self.value))
    }

    pub fn fill_percent(&self) -> f64 {
        self.fill_fraction * 100.0
    }
}

/// Each value is read as a percentage on its own; values are not scaled
/// against each other. Fills are clamped to the track.
pub fn tracks(series: &Series, labels: Option<&[String]>, colors: Option<&[String]>) -> Vec<ProgressTrack> {
    let palette = Palette::progress(colors);
    series
        .values()
        .enumerate()
        .map(|(i, value)| ProgressTrack {
            label: labels
                .and_then(|l| l.get(i))
                .filter(|l| !l.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Item {}", i + 1)),
            value,
            fill_fraction: value.clamp(0.0, 100.0) / 100.0,
            color: palette.color(i).to_string(),
        })
        .collect()
}

#[instrument(level = "trace", skip_all, fields(tracks = series.len()))]
pub fn render(series: &Series, labels: Option<&[String]>, colors: Option<&[String]>) -> Scene {
    let tracks = tracks(series, labels, colors);
    let rows = tracks.len().max(1) as f64;
    let mut scene = Scene::new(TRACK_WIDTH, rows * ROW_HEIGHT);

    for (i, track) in tracks.iter().enumerate() {
        let top = i as f64 * ROW_HEIGHT;
        scene.push(text(Point::new(0.0, top + TEXT_BASELINE), &track.label, TextAnchor::Start));
        scene.push(text(Point::new(TRACK_WIDTH, top + TEXT_BASELINE), &track.value_text(), TextAnchor::End));
        scene.push(bar(top, TRACK_WIDTH, TRACK_COLOR));
        if track.fill_fraction > 0.0 {
            scene.push(bar(top, track.fill_fraction * TRACK_WIDTH, &track.color));
        }
    }
    scene
}

fn text(position: Point, content: &str, anchor: TextAnchor) -> Primitive {
    Primitive::Text(Text {
        position,
        content: content.to_string(),
        anchor,
        size: TEXT_SIZE,
        color: TEXT_COLOR.to_string(),
    })
}

fn bar(row_top: f64, width: f64, color: &str) -> Primitive {
    Primitive::Rect(Rect {
        origin: Point::new(0.0, row_top + TRACK_OFFSET),
        width,
        height: TRACK_HEIGHT,
        corner_radius: TRACK_HEIGHT / 2.0,
        style: Style::filled(color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_kpi_tracks() {
        let labels = strings(&["Satisfaction", "NPS", "Retention"]);
        let tracks = tracks(&Series::from([87.0, 84.0, 78.0]), Some(&labels), None);
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].label, "Satisfaction");
        assert_eq!(tracks[0].value_text(), "87%");
        assert!((tracks[0].fill_fraction - 0.87).abs() < 1e-12);
        assert_eq!(tracks[0].color, "#3BC77D");
        assert_eq!(tracks[1].color, "#4E76D0");
    }

    #[test]
    fn test_values_are_independent_and_clamped() {
        let tracks = tracks(&Series::from([150.0, 40.0, -10.0]), None, None);
        assert_eq!(tracks[0].fill_fraction, 1.0);
        assert_eq!(tracks[0].value_text(), "150%");
        assert_eq!(tracks[1].fill_fraction, 0.4);
        assert_eq!(tracks[2].fill_fraction, 0.0);
    }

    #[test]
    fn test_missing_labels_fall_back() {
        let labels = strings(&["Only"]);
        let tracks = tracks(&Series::from([1.0, 2.0]), Some(&labels), None);
        assert_eq!(tracks[0].label, "Only");
        assert_eq!(tracks[1].label, "Item 2");
    }

    #[test]
    fn test_render_lays_out_rows() {
        let scene = render(&Series::from([50.0, 0.0]), None, None);
        assert_eq!(scene.view_box.height, 2.0 * ROW_HEIGHT);
        // two background tracks, one fill (zero fills are skipped)
        assert_eq!(scene.rects().count(), 3);
        assert_eq!(scene.texts().count(), 4);
        let fill = scene.rects().nth(1).unwrap();
        assert_eq!(fill.width, 100.0);
        assert_eq!(fill.origin.y, TRACK_OFFSET);
    }

    #[test]
    fn test_render_is_idempotent() {
        let series = Series::from([87.0, 84.0, 78.0]);
        let labels = strings(&["Satisfaction", "NPS", "Retention"]);
        assert_eq!(render(&series, Some(&labels), None), render(&series, Some(&labels), None));
    }
}
