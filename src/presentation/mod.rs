// Presentation layer - HTTP surface
pub mod app_state;
pub mod filter_query;
pub mod handlers;
