// Source trait for signal readings
use crate::domain::signal::{HistoricalSeries, LiveReading};
use async_trait::async_trait;
use chrono::NaiveDateTime;

#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Aggregated history for one signal over `[start, end)`
    async fn historical_series(
        &self,
        signal_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<HistoricalSeries>;

    /// A single current reading
    async fn live_reading(
        &self,
        signal_id: &str,
        now: NaiveDateTime,
    ) -> anyhow::Result<LiveReading>;
}
