// Synthetic signal charting service
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::signal_service::SignalService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::synthetic_source::SyntheticSignalSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chart, health_check, signal_history, signal_live};
use crate::presentation::page::index;
use crate::presentation::query::QueryDefaults;

/// Wire the synthetic source, services and routes together
pub fn build_app(config: &AppConfig) -> Router {
    let source = Arc::new(SyntheticSignalSource::new(config.generator.seed));

    let state = Arc::new(AppState {
        chart_service: ChartService::new(source.clone()),
        signal_service: SignalService::new(source),
        query_defaults: QueryDefaults {
            range_hours: config.chart.default_range_hours,
            theme: config.chart.default_theme,
        },
        poll_interval_ms: config.chart.poll_interval_ms,
    });

    router(state)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/chart", get(chart))
        .route("/signals/:id/history", get(signal_history))
        .route("/signals/:id/live", get(signal_live))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
