// Synthetic signal source - generates readings instead of querying a store
use crate::application::series_builder;
use crate::application::signal_source::SignalSource;
use crate::domain::signal::{HistoricalSeries, LiveReading};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, MutexGuard};

/// Owns the one RNG shared by every request. Builds are short and
/// synchronous, so the lock is never held across an await point.
pub struct SyntheticSignalSource {
    rng: Mutex<StdRng>,
}

impl SyntheticSignalSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                tracing::info!("Seeding signal generator with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // The generator has no invariants a panic could break
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SignalSource for SyntheticSignalSource {
    async fn historical_series(
        &self,
        signal_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> anyhow::Result<HistoricalSeries> {
        if end <= start {
            tracing::debug!("Empty range for {}: {} >= {}", signal_id, start, end);
        }
        let mut rng = self.rng();
        Ok(series_builder::build(&mut *rng, signal_id, start, end))
    }

    async fn live_reading(
        &self,
        signal_id: &str,
        now: NaiveDateTime,
    ) -> anyhow::Result<LiveReading> {
        let mut rng = self.rng();
        Ok(series_builder::live_reading(&mut *rng, signal_id, now))
    }
}
