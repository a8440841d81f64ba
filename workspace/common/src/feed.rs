//! Feed cards and the filter/like state of the feed page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Filter id that shows every card.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFilter {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    /// Relative age as displayed, e.g. `20h`
    pub timestamp: String,
    pub description: String,
    pub comments: u32,
    pub likes: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FeedItem {
    /// Letter shown in the card avatar.
    pub fn initial(&self) -> String {
        self.title.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feed {
    pub filters: Vec<FeedFilter>,
    pub items: Vec<FeedItem>,
}

impl Feed {
    pub fn item(&self, id: &str) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Cards that pass the active filters, in catalog order.
    pub fn visible<'a>(&'a self, filters: &'a FilterSet) -> impl Iterator<Item = &'a FeedItem> + 'a {
        self.items.iter().filter(move |item| filters.shows(&item.kind))
    }
}

/// Active feed filters. Never empty: with nothing selected it reads as `all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet(BTreeSet<String>);

impl Default for FilterSet {
    fn default() -> Self {
        Self(BTreeSet::from([ALL.to_string()]))
    }
}

impl FilterSet {
    /// Returns the set after clicking `filter`.
    ///
    /// Clicking `all` resets to `{all}`. Any other filter first drops `all`
    /// and then flips its own membership.
    pub fn toggle(&self, filter: &str) -> Self {
        if filter == ALL {
            return Self::default();
        }
        let mut next = self.0.clone();
        next.remove(ALL);
        if !next.remove(filter) {
            next.insert(filter.to_string());
        }
        if next.is_empty() {
            return Self::default();
        }
        debug!(?next, "Feed filters changed");
        Self(next)
    }

    pub fn is_active(&self, filter: &str) -> bool {
        self.0.contains(filter)
    }

    pub fn shows(&self, kind: &str) -> bool {
        self.is_active(ALL) || self.is_active(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Cards the user has liked in this session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LikeSet(BTreeSet<String>);

impl LikeSet {
    pub fn toggle(&self, id: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        Self(next)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Like count to display, one more than stored when liked.
    pub fn likes_for(&self, item: &FeedItem) -> u32 {
        item.likes + u32::from(self.is_liked(&item.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, kind: &str) -> FeedItem {
        FeedItem {
            id: id.to_string(),
            title: format!("card {}", id),
            timestamp: "1h".to_string(),
            description: String::new(),
            comments: 0,
            likes: 5,
            kind: kind.to_string(),
        }
    }

    fn feed() -> Feed {
        Feed {
            filters: Vec::new(),
            items: vec![item("1", "metrics"), item("2", "insights"), item("3", "metrics"), item("4", "kpis")],
        }
    }

    fn ids<'a>(items: impl Iterator<Item = &'a FeedItem>) -> Vec<&'a str> {
        items.map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let filters = FilterSet::default();
        assert!(filters.is_active(ALL));
        assert_eq!(ids(feed().visible(&filters)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_selecting_a_filter_drops_all() {
        let filters = FilterSet::default().toggle("metrics");
        assert!(!filters.is_active(ALL));
        assert_eq!(filters.iter().collect::<Vec<_>>(), vec!["metrics"]);
        assert_eq!(ids(feed().visible(&filters)), vec!["1", "3"]);

        let filters = filters.toggle("kpis");
        assert_eq!(ids(feed().visible(&filters)), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_deselecting_last_filter_falls_back_to_all() {
        let filters = FilterSet::default().toggle("metrics").toggle("metrics");
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn test_selecting_all_resets() {
        let filters = FilterSet::default().toggle("metrics").toggle("kpis").toggle(ALL);
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn test_like_toggle_adds_one() {
        let card = item("2", "insights");
        let likes = LikeSet::default().toggle("2");
        assert!(likes.is_liked("2"));
        assert_eq!(likes.likes_for(&card), 6);
        let likes = likes.toggle("2");
        assert_eq!(likes.likes_for(&card), 5);
    }

    #[test]
    fn test_initial() {
        assert_eq!(item("1", "metrics").initial(), "C");
        assert_eq!(feed().item("4").map(|i| i.kind.as_str()), Some("kpis"));
        assert!(feed().item("9").is_none());
    }
}
