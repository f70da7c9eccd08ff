// HTTP request handlers
use crate::domain::chart::ChartRequest;
use crate::infrastructure::chart_renderer::{Figure, chart_to_figure};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::query::interpret;
use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSettings {
    pub enabled: bool,
    pub interval_ms: u64,
}

#[derive(Serialize)]
pub struct ChartResponse {
    pub figure: Figure,
    pub live: LiveSettings,
    pub request: ChartRequest,
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Figure for the signals named in the query string
pub async fn chart(
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let request = interpret(query.as_deref(), now(), state.query_defaults);
    tracing::debug!(
        "Chart request for {:?} from {} to {}",
        request.signal_ids(),
        request.range.start,
        request.range.end
    );

    let chart = state.chart_service.build_chart(&request).await;
    let body = ChartResponse {
        figure: chart_to_figure(chart),
        live: LiveSettings {
            enabled: request.live,
            interval_ms: state.poll_interval_ms,
        },
        request,
    };

    respond(&body, &headers).await
}

/// Aggregated history for one signal; range comes from `start`/`end`/`hours`
pub async fn signal_history(
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let range = interpret(query.as_deref(), now(), state.query_defaults).range;

    match state.signal_service.history(&id, range).await {
        Ok(series) => respond(&series, &headers).await,
        Err(e) => {
            tracing::error!("Error building history for {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// One current reading for a signal
pub async fn signal_live(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.signal_service.live(&id, now()).await {
        Ok(reading) => respond(&reading, &headers).await,
        Err(e) => {
            tracing::error!("Error reading live value for {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
