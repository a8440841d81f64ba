pub mod ask;
pub mod check;
pub mod explain;
pub mod export_catalog;
pub mod render;

pub use ask::ask;
pub use check::check;
pub use explain::explain;
pub use export_catalog::{ExportFormat, export_catalog};
pub use render::render;
