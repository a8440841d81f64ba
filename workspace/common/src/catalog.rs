//! The bundled dashboard catalog.

use std::collections::BTreeSet;

use charts::{ChartError, Scene};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::chat::{ChatLibrary, DEFAULT_CHAT};
use crate::error::{CatalogError, Result};
use crate::feed::Feed;
use crate::report::Report;
use crate::sidebar::SidebarCatalog;

const BUILTIN: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub kind: String,
}

/// All content of the dashboard. Components receive it explicitly and never
/// carry sample data of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCatalog {
    pub company: Company,
    pub team_avatars: Vec<String>,
    pub feed: Feed,
    pub sidebar: SidebarCatalog,
    pub chats: ChatLibrary,
    pub report: Report,
}

/// A drawable chart of the catalog and the file stem it is exported under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedChart {
    pub name: String,
    pub scene: Scene,
    pub problem: Option<ChartError>,
}

impl DashboardCatalog {
    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    #[instrument(level = "debug", skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        debug!(
            feed_items = catalog.feed.items.len(),
            chats = catalog.chats.by_id.len(),
            trends = catalog.report.trends.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Checks the structure the UI relies on. Chart content is reported
    /// separately by [`DashboardCatalog::charts`].
    pub fn validate(&self) -> Result<()> {
        for id in self.chats.by_id.keys() {
            check_id("chat", id)?;
            if id == DEFAULT_CHAT {
                return Err(CatalogError::DuplicateId { kind: "chat", id: id.clone() });
            }
        }

        let mut slugs = BTreeSet::new();
        for trend in &self.report.trends {
            check_id("trend", &trend.slug)?;
            if !slugs.insert(trend.slug.as_str()) {
                return Err(CatalogError::DuplicateId { kind: "trend", id: trend.slug.clone() });
            }
        }

        let mut seen = BTreeSet::new();
        for item in &self.feed.items {
            check_id("feed item", &item.id)?;
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId { kind: "feed item", id: item.id.clone() });
            }
            if !self.chats.contains(&item.id) {
                return Err(CatalogError::UnknownChat(item.id.clone()));
            }
        }
        self.sidebar.validate()?;
        if self.team_avatars.is_empty() {
            return Err(CatalogError::EmptyCarousel("team avatars"));
        }
        Ok(())
    }

    /// Renders every chart: `chat-<id>` for chat cards (the fallback as
    /// `chat-default`) and `report-<slug>` for report trends.
    pub fn charts(&self) -> Vec<NamedChart> {
        let chats = self.chats.charts().map(|(id, descriptor)| NamedChart {
            name: format!("chat-{}", id),
            scene: descriptor.render(),
            problem: descriptor.validate().err(),
        });
        let trends = self.report.trends.iter().map(|trend| NamedChart {
            name: format!("report-{}", trend.slug),
            scene: trend.render(),
            problem: None,
        });
        let charts: Vec<NamedChart> = chats.chain(trends).collect();
        info!(count = charts.len(), "Rendered catalog charts");
        charts
    }
}

/// Ids are restricted to `[A-Za-z0-9_-]+` so they are safe as path segments.
fn check_id(kind: &'static str, id: &str) -> Result<()> {
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CatalogError::InvalidId { kind, id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::Timeframe;
    use charts::ChartKind;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = DashboardCatalog::builtin().unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.feed.filters.len(), 6);
        assert_eq!(catalog.feed.items.len(), 6);
        assert_eq!(catalog.sidebar.highlights_for(Timeframe::Week).len(), 3);
        assert_eq!(catalog.sidebar.completed_count(), 2);
        assert_eq!(catalog.team_avatars.len(), 3);
    }

    #[test]
    fn test_builtin_chats() {
        let catalog = DashboardCatalog::builtin().unwrap();
        assert_eq!(catalog.chats.content_for("1").chart.kind(), ChartKind::Line);
        assert_eq!(catalog.chats.content_for("2").chart.kind(), ChartKind::Radial);
        assert_eq!(catalog.chats.content_for("3").chart.kind(), ChartKind::Donut);
        assert_eq!(catalog.chats.content_for("5").chart.kind(), ChartKind::Progress);
        assert_eq!(catalog.chats.content_for("missing").chart.display.value, "1,234");
    }

    #[test]
    fn test_builtin_report() {
        let report = DashboardCatalog::builtin().unwrap().report;
        assert_eq!(report.published_label(), "December 26, 2024");
        assert_eq!(report.likes, 24);
        assert_eq!(report.comments.len(), 2);
        assert_eq!(report.quarters.len(), 8);
        assert!((report.revenue_share_total() - 100.0).abs() < 1e-9);
        assert!(report.trends.iter().all(|t| t.data.len() == report.quarters.len()));
        assert_eq!(report.trend("quarterly-revenue").unwrap().color, "#F5B732");
        assert!(report.assistant.respond("$500M").contains("stock buyback"));
        assert!(report.assistant.respond("hi").starts_with("I can help you understand"));
    }

    #[test]
    fn test_charts_are_named_and_valid() {
        let catalog = DashboardCatalog::builtin().unwrap();
        let charts = catalog.charts();
        let names: Vec<&str> = charts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 6 + 1 + 4);
        assert!(names.contains(&"chat-default"));
        assert!(names.contains(&"report-net-revenue-retention"));
        assert!(charts.iter().all(|c| c.problem.is_none()));
        assert!(charts.iter().all(|c| !c.scene.is_empty()));
    }

    #[test]
    fn test_validate_rejects_unknown_chat() {
        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.chats.by_id.remove("6");
        assert!(matches!(catalog.validate(), Err(CatalogError::UnknownChat(id)) if id == "6"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = DashboardCatalog::builtin().unwrap();
        let copy = catalog.feed.items[0].clone();
        catalog.feed.items.push(copy);
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn test_validate_rejects_ids_unsafe_as_file_names() {
        for bad in ["x/../../escaped", "a b", "", "..", "chat.svg"] {
            let mut catalog = DashboardCatalog::builtin().unwrap();
            let content = catalog.chats.fallback.clone();
            catalog.chats.by_id.insert(bad.to_string(), content);
            assert!(
                matches!(catalog.validate(), Err(CatalogError::InvalidId { kind: "chat", ref id }) if id == bad),
                "{:?} accepted",
                bad
            );
        }

        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.report.trends[0].slug = "../revenue".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidId { kind: "trend", .. })));

        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.feed.items[0].id = "1/2".to_string();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidId { kind: "feed item", .. })));
    }

    #[test]
    fn test_validate_rejects_clashing_chart_names() {
        let mut catalog = DashboardCatalog::builtin().unwrap();
        let content = catalog.chats.fallback.clone();
        catalog.chats.by_id.insert(DEFAULT_CHAT.to_string(), content);
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId { kind: "chat", .. })));

        let mut catalog = DashboardCatalog::builtin().unwrap();
        catalog.report.trends[1].slug = catalog.report.trends[0].slug.clone();
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId { kind: "trend", .. })));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(DashboardCatalog::from_json("{"), Err(CatalogError::Parse(_))));
    }
}
