//! Dashboard content shared between the web frontend and the CLI.
//!
//! Everything the dashboard shows lives in a [`DashboardCatalog`] loaded from
//! the bundled `data/catalog.json`. The types here also carry the small bits
//! of UI state logic (filter toggling, carousels, chat tabs) so they can be
//! tested without a browser.

pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod error;
pub mod feed;
pub mod report;
pub mod sidebar;

pub use assistant::{Assistant, ResponseRule, explain_prompt};
pub use catalog::{Company, DashboardCatalog, NamedChart};
pub use chat::{ChatContent, ChatLibrary, ChatMessage, MessageKind};
pub use error::{CatalogError, Result};
pub use feed::{Feed, FeedFilter, FeedItem, FilterSet, LikeSet};
pub use report::{Engagement, ExplainTarget, PendingReply, Report, ReportChat, ReportComment};
pub use sidebar::{Carousel, Highlight, Request, RequestStatus, SidebarCatalog, Timeframe};
