//! The quarterly report page: content, engagement and the side chat.

use charts::line::{self, LineLayout};
use charts::{Scene, Series};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assistant::{Assistant, explain_prompt};
use crate::chat::{ChatMessage, MessageKind};

/// Display format of the publication date, e.g. `December 26, 2024`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub initial: String,
    pub color: String,
}

/// A figure the reader can click to have it explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainTarget {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ExplainTarget {
    pub fn new(value: impl Into<String>, context: Option<&str>) -> Self {
        Self {
            value: value.into(),
            context: context.map(str::to_string),
        }
    }

    pub fn prompt(&self) -> String {
        explain_prompt(&self.value, self.context.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub label: String,
    /// Percent of total revenue
    pub share: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub context: String,
    pub sublabel: String,
    #[serde(default)]
    pub trending: bool,
    /// Rendered with the large numeric style
    #[serde(default)]
    pub large: bool,
}

impl KeyMetric {
    pub fn target(&self) -> ExplainTarget {
        ExplainTarget::new(&self.value, Some(&self.context))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub opening: String,
    pub takeaway: String,
    pub closing: String,
}

/// One of the area charts in the trends section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    /// File-name friendly id
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub value: ExplainTarget,
    pub change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_context: Option<String>,
    pub data: Series,
    pub color: String,
}

impl TrendChart {
    pub const HEIGHT: f64 = 120.0;

    pub fn change_target(&self) -> ExplainTarget {
        ExplainTarget::new(&self.change, self.change_context.as_deref())
    }

    pub fn render(&self) -> Scene {
        line::render(&self.data, &LineLayout::area(&self.color, Self::HEIGHT))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub metric: String,
    pub current: String,
    pub previous: String,
    pub change: String,
    /// Colours the change green when set, red otherwise
    pub positive: bool,
}

impl TableRow {
    pub fn current_target(&self) -> ExplainTarget {
        ExplainTarget::new(&self.current, Some(&self.metric))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportComment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub color: String,
    pub text: String,
    pub time: String,
}

impl ReportComment {
    /// A comment by the current reader. Blank text is rejected.
    pub fn from_reader(id: impl Into<String>, text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            author: "You".to_string(),
            avatar: "Y".to_string(),
            color: "#4E76D0".to_string(),
            text: text.to_string(),
            time: "Just now".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedReport {
    pub kind: String,
    pub title: String,
    pub pages: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    pub authors: Vec<Author>,
    pub published: NaiveDate,
    pub period: String,
    pub revenue_tabs: Vec<String>,
    pub headline: ExplainTarget,
    pub growth: ExplainTarget,
    pub revenue_breakdown: Vec<RevenueShare>,
    /// Rows of the key metrics grid
    pub key_metrics: Vec<Vec<KeyMetric>>,
    pub summary: Summary,
    pub quarters: Vec<String>,
    pub trends: Vec<TrendChart>,
    pub financial_highlights: Vec<TableRow>,
    pub customer_metrics_note: String,
    pub customer_metrics: Vec<TableRow>,
    pub guidance_intro: String,
    pub guidance: Vec<Guidance>,
    pub capital_allocation: String,
    pub likes: u32,
    pub comments: Vec<ReportComment>,
    pub related: Vec<RelatedReport>,
    pub assistant: Assistant,
}

impl Report {
    pub fn published_label(&self) -> String {
        self.published.format(DATE_FORMAT).to_string()
    }

    pub fn trend(&self, slug: &str) -> Option<&TrendChart> {
        self.trends.iter().find(|t| t.slug == slug)
    }

    pub fn revenue_share_total(&self) -> f64 {
        self.revenue_breakdown.iter().map(|s| s.share).sum()
    }
}

/// Like button state of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub liked: bool,
    pub likes: u32,
}

impl Engagement {
    pub fn new(likes: u32) -> Self {
        Self { liked: false, likes }
    }

    pub fn toggle(self) -> Self {
        if self.liked {
            Self { liked: false, likes: self.likes.saturating_sub(1) }
        } else {
            Self { liked: true, likes: self.likes + 1 }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatTab {
    pub id: u32,
    pub title: String,
    pub messages: Vec<ChatMessage>,
}

/// A reply owed to a tab, delivered once the typing delay has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub tab: u32,
    pub query: String,
}

/// Tabs of the report's side chat. Always holds at least one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportChat {
    tabs: Vec<ChatTab>,
    active: u32,
    next_tab: u32,
    next_message: u64,
}

impl Default for ReportChat {
    fn default() -> Self {
        Self {
            tabs: vec![ChatTab { id: 1, title: "New chat".to_string(), messages: Vec::new() }],
            active: 1,
            next_tab: 2,
            next_message: 1,
        }
    }
}

impl ReportChat {
    pub fn tabs(&self) -> &[ChatTab] {
        &self.tabs
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    pub fn active_tab(&self) -> Option<&ChatTab> {
        self.tabs.iter().find(|t| t.id == self.active)
    }

    pub fn select(&mut self, id: u32) {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active = id;
        }
    }

    /// Opens an empty tab and makes it active.
    pub fn add_tab(&mut self) -> u32 {
        let id = self.next_tab;
        self.next_tab += 1;
        self.tabs.push(ChatTab { id, title: "New chat".to_string(), messages: Vec::new() });
        self.active = id;
        id
    }

    /// Closes a tab. The last remaining tab stays open; closing the active
    /// tab activates the first one left.
    pub fn close_tab(&mut self, id: u32) -> bool {
        if self.tabs.len() <= 1 {
            debug!(id, "Refusing to close the last chat tab");
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        if self.tabs.len() == before {
            return false;
        }
        if self.active == id {
            if let Some(first) = self.tabs.first() {
                self.active = first.id;
            }
        }
        true
    }

    /// Posts what the user typed into the active tab.
    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push_active(MessageKind::User, text.to_string())?;
        Some(PendingReply { tab: self.active, query: text.to_string() })
    }

    /// Posts the explain prompt for a clicked value. The reply is looked up
    /// with the bare value, not the prompt.
    pub fn explain(&mut self, target: &ExplainTarget) -> Option<PendingReply> {
        self.push_active(MessageKind::User, target.prompt())?;
        Some(PendingReply { tab: self.active, query: target.value.clone() })
    }

    /// Appends the assistant's answer to the tab that asked. A reply for a
    /// tab closed in the meantime is dropped.
    pub fn deliver(&mut self, reply: &PendingReply, assistant: &Assistant) -> bool {
        let content = assistant.respond(&reply.query).to_string();
        let id = self.message_id();
        match self.tabs.iter_mut().find(|t| t.id == reply.tab) {
            Some(tab) => {
                tab.messages.push(ChatMessage { id, kind: MessageKind::Ai, content, mention: None });
                true
            }
            None => {
                warn!(tab = reply.tab, "Dropping reply for closed chat tab");
                false
            }
        }
    }

    fn push_active(&mut self, kind: MessageKind, content: String) -> Option<()> {
        let id = self.message_id();
        let active = self.active;
        let tab = self.tabs.iter_mut().find(|t| t.id == active)?;
        tab.messages.push(ChatMessage { id, kind, content, mention: None });
        Some(())
    }

    fn message_id(&mut self) -> String {
        let id = self.next_message;
        self.next_message += 1;
        id.to_string()
    }
}
