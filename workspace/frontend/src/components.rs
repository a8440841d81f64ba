pub mod chart;
pub mod chat;
pub mod feed;
pub mod layout;
pub mod report;
pub mod report_chat;
pub mod sidebar;
