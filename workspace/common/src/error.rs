use thiserror::Error;

use crate::sidebar::Timeframe;

/// Problems found while loading or checking a dashboard catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document could not be deserialized
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No highlights for timeframe {0}")]
    MissingTimeframe(Timeframe),

    /// A carousel has nothing to cycle through
    #[error("Carousel '{0}' is empty")]
    EmptyCarousel(&'static str),

    #[error("Chat '{0}' referenced by the feed has no content")]
    UnknownChat(String),

    /// Ids end up in routes and file names
    #[error("Invalid {kind} id '{id}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidId { kind: &'static str, id: String },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
