// Application layer - use cases over the signal source
pub mod chart_service;
pub mod series_builder;
pub mod signal_service;
pub mod signal_source;
