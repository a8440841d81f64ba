use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, Result, SeriesProblem};
use crate::line::LineLayout;
use crate::scene::Scene;
use crate::series::Series;
use crate::{bar, donut, line, progress, radial};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radial,
    Line,
    Bar,
    Donut,
    Progress,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Radial => "radial",
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Donut => "donut",
            ChartKind::Progress => "progress",
        };
        f.write_str(name)
    }
}

/// The plotted part of a descriptor, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartData {
    Radial {
        percentage: f64,
    },
    Line {
        data: Series,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
    },
    Bar {
        data: Series,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        colors: Option<Vec<String>>,
    },
    Donut {
        data: Series,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        colors: Option<Vec<String>>,
    },
    Progress {
        data: Series,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        colors: Option<Vec<String>>,
    },
}

/// Text shown around a chart. The renderer never looks at it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMeta {
    /// Headline value, e.g. `$2.4M`
    pub value: String,
    /// Unit label under the headline
    pub label: String,
    #[serde(default)]
    pub trend: String,
    #[serde(default)]
    pub trend_up: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(flatten)]
    pub data: ChartData,
    #[serde(flatten)]
    pub display: DisplayMeta,
}

impl ChartDescriptor {
    pub fn new(data: ChartData, display: DisplayMeta) -> Self {
        Self { data, display }
    }

    pub fn kind(&self) -> ChartKind {
        match self.data {
            ChartData::Radial { .. } => ChartKind::Radial,
            ChartData::Line { .. } => ChartKind::Line,
            ChartData::Bar { .. } => ChartKind::Bar,
            ChartData::Donut { .. } => ChartKind::Donut,
            ChartData::Progress { .. } => ChartKind::Progress,
        }
    }

    pub fn series(&self) -> Option<&Series> {
        match &self.data {
            ChartData::Radial { .. } => None,
            ChartData::Line { data, .. }
            | ChartData::Bar { data, .. }
            | ChartData::Donut { data, .. }
            | ChartData::Progress { data, .. } => Some(data),
        }
    }

    pub fn labels(&self) -> Option<&[String]> {
        match &self.data {
            ChartData::Radial { .. } => None,
            ChartData::Line { labels, .. }
            | ChartData::Bar { labels, .. }
            | ChartData::Donut { labels, .. }
            | ChartData::Progress { labels, .. } => labels.as_deref(),
        }
    }

    pub fn colors(&self) -> Option<&[String]> {
        match &self.data {
            ChartData::Radial { .. } | ChartData::Line { .. } => None,
            ChartData::Bar { colors, .. }
            | ChartData::Donut { colors, .. }
            | ChartData::Progress { colors, .. } => colors.as_deref(),
        }
    }

    /// Reports input the renderer would have to degrade.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind();
        let fail = |problem| Err(ChartError::invalid(kind, problem));

        if let ChartData::Radial { percentage } = self.data {
            if !percentage.is_finite() {
                return fail(SeriesProblem::NonFinite);
            }
            if !(0.0..=100.0).contains(&percentage) {
                return fail(SeriesProblem::OutOfRange);
            }
            return Ok(());
        }

        let Some(series) = self.series() else {
            return Ok(());
        };
        if series.is_empty() {
            return fail(SeriesProblem::Empty);
        }
        if series.has_non_finite() {
            return fail(SeriesProblem::NonFinite);
        }
        if let Some(labels) = self.labels() {
            if labels.len() != series.len() {
                return fail(SeriesProblem::LabelMismatch {
                    labels: labels.len(),
                    values: series.len(),
                });
            }
        }

        match kind {
            ChartKind::Line if series.len() == 1 => fail(SeriesProblem::SingleElement),
            ChartKind::Line if series.is_flat() => fail(SeriesProblem::ZeroRange),
            ChartKind::Donut if series.weight_total() <= 0.0 => fail(SeriesProblem::ZeroTotal),
            ChartKind::Progress if series.values().any(|v| !(0.0..=100.0).contains(&v)) => {
                fail(SeriesProblem::OutOfRange)
            }
            _ => Ok(()),
        }
    }

    /// Draws the chart. Invalid input is logged and rendered in its
    /// degenerate form rather than rejected.
    pub fn render(&self) -> Scene {
        if let Err(err) = self.validate() {
            warn!(%err, "rendering degenerate chart");
        }
        match &self.data {
            ChartData::Radial { percentage } => radial::render(*percentage),
            ChartData::Line { data, .. } => line::render(data, &LineLayout::card()),
            ChartData::Bar { data, colors, .. } => bar::render(data, colors.as_deref()),
            ChartData::Donut { data, colors, .. } => donut::render(data, colors.as_deref()),
            ChartData::Progress { data, labels, colors } => {
                progress::render(data, labels.as_deref(), colors.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> DisplayMeta {
        DisplayMeta {
            value: "4,892".to_string(),
            label: "customers analyzed".to_string(),
            trend: "Up 5.2% from last quarter".to_string(),
            trend_up: true,
            description: "Customer segmentation analysis complete".to_string(),
        }
    }

    fn line(values: &[f64]) -> ChartDescriptor {
        ChartDescriptor::new(ChartData::Line { data: Series::from(values), labels: None }, display())
    }

    #[test]
    fn test_deserialize_tagged_descriptor() {
        let json = r##"{
            "type": "donut",
            "value": "4,892",
            "label": "customers analyzed",
            "trend": "Up 5.2% from last quarter",
            "trendUp": true,
            "description": "Customer segmentation analysis complete",
            "data": [28, 35, 22, 15],
            "labels": ["Premium", "Value Seekers", "Loyalists", "Occasional"],
            "colors": ["#4E76D0", "#F75F50", "#F5B732", "#3BC77D"]
        }"##;
        let descriptor: ChartDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.kind(), ChartKind::Donut);
        assert_eq!(descriptor.display, display());
        assert_eq!(descriptor.series().unwrap().len(), 4);
        assert_eq!(descriptor.colors().unwrap()[1], "#F75F50");
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_deserialize_radial_from_yaml() {
        let yaml = "type: radial\npercentage: 75\nvalue: '8,921'\nlabel: mentions\n";
        let descriptor: ChartDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(descriptor.data, ChartData::Radial { percentage: 75.0 });
        assert!(!descriptor.display.trend_up);
        assert!(descriptor.series().is_none());
        assert_eq!(descriptor.render().circles().count(), 2);
    }

    #[test]
    fn test_round_trip_keeps_type_tag() {
        let descriptor = line(&[1.0, 2.0]);
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["trendUp"], true);
        assert!(value.get("labels").is_none());
    }

    #[test]
    fn test_validate_line_problems() {
        assert_eq!(line(&[]).validate().unwrap_err().problem(), SeriesProblem::Empty);
        assert_eq!(line(&[4.0]).validate().unwrap_err().problem(), SeriesProblem::SingleElement);
        assert_eq!(line(&[4.0, 4.0]).validate().unwrap_err().problem(), SeriesProblem::ZeroRange);
        assert_eq!(
            line(&[4.0, f64::NAN]).validate().unwrap_err().problem(),
            SeriesProblem::NonFinite
        );
        assert!(line(&[4.0, 5.0]).validate().is_ok());
    }

    #[test]
    fn test_validate_donut_zero_total() {
        let descriptor = ChartDescriptor::new(
            ChartData::Donut { data: Series::from([0.0, 0.0]), labels: None, colors: None },
            display(),
        );
        let err = descriptor.validate().unwrap_err();
        assert_eq!(err, ChartError::invalid(ChartKind::Donut, SeriesProblem::ZeroTotal));
        // still renders, as a neutral ring
        assert_eq!(descriptor.render().circles().count(), 2);
    }

    #[test]
    fn test_validate_label_mismatch() {
        let descriptor = ChartDescriptor::new(
            ChartData::Bar {
                data: Series::from([1.0, 2.0]),
                labels: Some(vec!["Q2".to_string()]),
                colors: None,
            },
            display(),
        );
        assert_eq!(
            descriptor.validate().unwrap_err().problem(),
            SeriesProblem::LabelMismatch { labels: 1, values: 2 }
        );
    }

    #[test]
    fn test_validate_percentages() {
        let radial = ChartDescriptor::new(ChartData::Radial { percentage: 120.0 }, display());
        assert_eq!(radial.validate().unwrap_err().problem(), SeriesProblem::OutOfRange);

        let progress = ChartDescriptor::new(
            ChartData::Progress { data: Series::from([87.0, 101.0]), labels: None, colors: None },
            display(),
        );
        assert_eq!(progress.validate().unwrap_err().problem(), SeriesProblem::OutOfRange);
    }

    #[test]
    fn test_render_dispatches_by_kind() {
        let descriptor = line(&[30.0, 45.0, 35.0]);
        let scene = descriptor.render();
        assert_eq!(scene.circles().count(), 3);
        assert_eq!(scene, descriptor.render());

        let bar = ChartDescriptor::new(
            ChartData::Bar { data: Series::from([8.0, 6.0]), labels: None, colors: None },
            display(),
        );
        assert_eq!(bar.render().rects().count(), 2);
    }
}
