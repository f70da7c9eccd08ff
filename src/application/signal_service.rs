// Signal service - Use cases for raw history and live readings
use crate::application::signal_source::SignalSource;
use crate::domain::chart::TimeRange;
use crate::domain::signal::{HistoricalSeries, LiveReading};
use chrono::NaiveDateTime;
use std::sync::Arc;

#[derive(Clone)]
pub struct SignalService {
    source: Arc<dyn SignalSource>,
}

impl SignalService {
    pub fn new(source: Arc<dyn SignalSource>) -> Self {
        Self { source }
    }

    pub async fn history(
        &self,
        signal_id: &str,
        range: TimeRange,
    ) -> anyhow::Result<HistoricalSeries> {
        self.source
            .historical_series(signal_id, range.start, range.end)
            .await
    }

    pub async fn live(&self, signal_id: &str, now: NaiveDateTime) -> anyhow::Result<LiveReading> {
        self.source.live_reading(signal_id, now).await
    }
}
