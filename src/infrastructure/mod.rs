// Infrastructure layer - adapters for generation, rendering, config and HTTP encoding
pub mod chart_renderer;
pub mod config;
pub mod http_response;
pub mod synthetic_source;
