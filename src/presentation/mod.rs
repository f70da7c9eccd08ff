// Presentation layer - HTTP handlers, URL interpretation and the chart page
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod query;
