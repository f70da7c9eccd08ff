// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::signal_service::SignalService;
use crate::presentation::query::QueryDefaults;

#[derive(Clone)]
pub struct AppState {
    pub chart_service: ChartService,
    pub signal_service: SignalService,
    pub query_defaults: QueryDefaults,
    pub poll_interval_ms: u64,
}
