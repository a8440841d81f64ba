//! Right-hand sidebar: highlight cards per timeframe, tags and requests.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "D")]
    Day,
    #[serde(rename = "W")]
    Week,
    #[serde(rename = "M")]
    Month,
    #[serde(rename = "Q")]
    Quarter,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [Timeframe::Day, Timeframe::Week, Timeframe::Month, Timeframe::Quarter];

    /// One-letter button caption.
    pub fn short(&self) -> &'static str {
        match self {
            Timeframe::Day => "D",
            Timeframe::Week => "W",
            Timeframe::Month => "M",
            Timeframe::Quarter => "Q",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub badge: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Completed => "Completed",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Pending => "Pending",
        }
    }

    /// Class suffix for the status badge, e.g. `in-progress`.
    pub fn css_class(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
}

/// Position in a list that wraps around when advanced past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    /// Same position on a list of a different length, back at the start.
    pub fn reset(self, len: usize) -> Self {
        Self::new(len)
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SidebarCatalog {
    pub highlights: BTreeMap<Timeframe, Vec<Highlight>>,
    pub tags: Vec<String>,
    pub requests: Vec<Request>,
}

impl SidebarCatalog {
    pub fn highlights_for(&self, timeframe: Timeframe) -> &[Highlight] {
        self.highlights.get(&timeframe).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn completed_count(&self) -> usize {
        self.requests.iter().filter(|r| r.status == RequestStatus::Completed).count()
    }

    /// Share of completed requests, 0 when there are none.
    pub fn completion_percent(&self) -> f64 {
        if self.requests.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.requests.len() as f64 * 100.0
    }

    pub fn validate(&self) -> Result<()> {
        for timeframe in Timeframe::ALL {
            match self.highlights.get(&timeframe) {
                None => return Err(CatalogError::MissingTimeframe(timeframe)),
                Some(list) if list.is_empty() => return Err(CatalogError::EmptyCarousel("highlights")),
                Some(_) => {}
            }
        }
        if self.requests.is_empty() {
            return Err(CatalogError::EmptyCarousel("requests"));
        }
        Ok(())
    }
}
