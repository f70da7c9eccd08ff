// Historical series builder - synthesizes and aggregates readings per planned step
use crate::domain::aggregation::{self, AggregationPlan};
use crate::domain::signal::{HistoricalSeries, LiveReading, SignalPoint, SignalStatus};
use crate::domain::synthesizer::{self, round2};
use chrono::NaiveDateTime;
use rand::Rng;

/// Standard deviation of every synthesized sample.
pub const SAMPLE_VARIANCE: f64 = 10.0;

/// Share of an interval's samples that must exceed a severity before the
/// whole interval takes that status. Compared with a strict `>`.
const STATUS_SHARE: f64 = 0.3;

/// Build the aggregate series for `id` over `[start, end)`.
///
/// Returns an empty series when `end <= start`. Every call draws fresh
/// samples; only the timestamps are stable between calls.
pub fn build<R: Rng + ?Sized>(
    rng: &mut R,
    id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> HistoricalSeries {
    if end <= start {
        return Vec::new();
    }

    let plan = aggregation::plan(end - start);
    let base_value = synthesizer::base_value(id);
    let step = plan.interval();

    let capacity = ((end - start).num_seconds() / plan.interval_seconds + 1).max(0) as usize;
    let mut series = Vec::with_capacity(capacity);

    let mut current = start;
    while current < end {
        series.push(aggregate_interval(rng, id, current, base_value, &plan));
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::debug!(
        "Built {} {} points for {}",
        series.len(),
        plan.level.as_str(),
        id
    );

    series
}

fn aggregate_interval<R: Rng + ?Sized>(
    rng: &mut R,
    id: &str,
    timestamp: NaiveDateTime,
    base_value: f64,
    plan: &AggregationPlan,
) -> SignalPoint {
    let samples: Vec<f64> = (0..plan.samples_per_interval)
        .map(|_| synthesizer::sample(rng, base_value, SAMPLE_VARIANCE))
        .collect();

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SignalPoint {
        id: id.to_string(),
        timestamp,
        value: round2(mean),
        status: interval_status(&samples, plan.samples_per_interval),
        aggregation_level: plan.level,
        sample_count: plan.samples_per_interval,
        min_value: round2(min),
        max_value: round2(max),
    }
}

/// Critical wins over high; each needs more than 30% of the interval's
/// samples. With two samples a single critical reading is enough.
pub fn interval_status(samples: &[f64], samples_per_interval: u32) -> SignalStatus {
    let threshold = samples_per_interval as f64 * STATUS_SHARE;

    let mut critical = 0u32;
    let mut high = 0u32;
    for &value in samples {
        match synthesizer::classify(value) {
            SignalStatus::Critical => critical += 1,
            SignalStatus::High => high += 1,
            SignalStatus::Normal => {}
        }
    }

    if critical as f64 > threshold {
        SignalStatus::Critical
    } else if high as f64 > threshold {
        SignalStatus::High
    } else {
        SignalStatus::Normal
    }
}

/// One raw reading for `id` stamped at `now`.
pub fn live_reading<R: Rng + ?Sized>(rng: &mut R, id: &str, now: NaiveDateTime) -> LiveReading {
    let value = synthesizer::sample(rng, synthesizer::base_value(id), SAMPLE_VARIANCE);
    LiveReading {
        id: id.to_string(),
        timestamp: now,
        value,
        status: synthesizer::classify(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signal::AggregationLevel;
    use chrono::{NaiveDate, TimeDelta};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_two_day_span_is_hourly() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let series = build(&mut rng(), "Temperature", t0(), end);

        assert_eq!(series.len(), 48);
        for point in &series {
            assert_eq!(point.aggregation_level, AggregationLevel::Hourly);
            assert_eq!(point.sample_count, 4);
            assert_eq!(point.id, "Temperature");
        }
    }

    #[test]
    fn test_thirty_minute_span_is_minutely() {
        let series = build(&mut rng(), "Temperature", t0(), t0() + TimeDelta::minutes(30));

        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|p| p.aggregation_level == AggregationLevel::Minutely));
        assert!(series.iter().all(|p| p.sample_count == 2));
    }

    #[test]
    fn test_timestamps_step_by_interval_within_span() {
        let spans = [
            TimeDelta::minutes(7) + TimeDelta::seconds(30),
            TimeDelta::hours(25),
            TimeDelta::days(3) + TimeDelta::minutes(10),
            TimeDelta::days(40),
            TimeDelta::days(800),
        ];
        let mut rng = rng();

        for span in spans {
            let end = t0() + span;
            let series = build(&mut rng, "Humidity_2", t0(), end);
            let step = aggregation::plan(span).interval();

            assert!(!series.is_empty());
            assert_eq!(series[0].timestamp, t0());
            assert!(series.last().unwrap().timestamp < end);
            for pair in series.windows(2) {
                assert_eq!(pair[1].timestamp - pair[0].timestamp, step);
            }
        }
    }

    #[test]
    fn test_partial_last_step_is_included() {
        // 90 seconds at one-minute steps: points at :00 and :01
        let series = build(&mut rng(), "Flow", t0(), t0() + TimeDelta::seconds(90));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_values_within_bounds() {
        let mut rng = rng();
        for id in ["Temperature_1", "Humidity", "Pressure_A1", "Power", "Flow", "Other"] {
            let series = build(&mut rng, id, t0(), t0() + TimeDelta::days(10));
            for p in &series {
                assert!(p.min_value <= p.value, "{:?}", p);
                assert!(p.value <= p.max_value, "{:?}", p);
                assert!((0.0..=100.0).contains(&p.value));
                assert!((0.0..=100.0).contains(&p.min_value));
                assert!((0.0..=100.0).contains(&p.max_value));
            }
        }
    }

    #[test]
    fn test_empty_for_non_positive_span() {
        assert!(build(&mut rng(), "Temperature", t0(), t0()).is_empty());
        assert!(build(&mut rng(), "Temperature", t0(), t0() - TimeDelta::hours(1)).is_empty());
    }

    #[test]
    fn test_structure_is_stable_between_calls() {
        let end = t0() + TimeDelta::days(9);
        let first = build(&mut StdRng::seed_from_u64(1), "Power", t0(), end);
        let second = build(&mut StdRng::seed_from_u64(2), "Power", t0(), end);

        assert_eq!(first.len(), second.len());
        let first_ts: Vec<_> = first.iter().map(|p| p.timestamp).collect();
        let second_ts: Vec<_> = second.iter().map(|p| p.timestamp).collect();
        assert_eq!(first_ts, second_ts);
    }

    #[test]
    fn test_same_seed_reproduces_values() {
        let end = t0() + TimeDelta::hours(2);
        let first = build(&mut StdRng::seed_from_u64(9), "Temperature", t0(), end);
        let second = build(&mut StdRng::seed_from_u64(9), "Temperature", t0(), end);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pressure_saturates_at_ceiling() {
        let series = build(&mut rng(), "Pressure_A1", t0(), t0() + TimeDelta::hours(3));
        let saturated = series.iter().filter(|p| p.value == 100.0).count();

        assert_eq!(series.len(), 180);
        assert!(saturated as f64 >= series.len() as f64 * 0.99);
        assert!(series.iter().all(|p| p.status == SignalStatus::Critical));
    }

    #[test]
    fn test_interval_status_thresholds_are_strict() {
        // 2 samples: threshold 0.6, one critical sample is enough
        assert_eq!(interval_status(&[95.0, 10.0], 2), SignalStatus::Critical);
        assert_eq!(interval_status(&[70.0, 10.0], 2), SignalStatus::High);
        assert_eq!(interval_status(&[10.0, 20.0], 2), SignalStatus::Normal);

        // 4 samples: threshold 1.2, one is not enough, two are
        assert_eq!(interval_status(&[95.0, 10.0, 10.0, 10.0], 4), SignalStatus::Normal);
        assert_eq!(interval_status(&[95.0, 95.0, 10.0, 10.0], 4), SignalStatus::Critical);
        assert_eq!(interval_status(&[95.0, 70.0, 10.0, 10.0], 4), SignalStatus::Normal);
        assert_eq!(interval_status(&[95.0, 70.0, 70.0, 10.0], 4), SignalStatus::High);

        // 6 samples: threshold 1.8
        assert_eq!(
            interval_status(&[95.0, 95.0, 70.0, 70.0, 10.0, 10.0], 6),
            SignalStatus::Critical
        );

        // 7 samples: threshold 2.1, critical beats high
        assert_eq!(
            interval_status(&[95.0, 95.0, 95.0, 70.0, 70.0, 70.0, 10.0], 7),
            SignalStatus::Critical
        );
        assert_eq!(
            interval_status(&[95.0, 95.0, 70.0, 70.0, 70.0, 10.0, 10.0], 7),
            SignalStatus::High
        );
    }

    #[test]
    fn test_equal_samples_collapse_bounds() {
        let plan = aggregation::plan(TimeDelta::days(2));
        // every sample clamps to the ceiling
        let mut rng = rng();
        let point = aggregate_interval(&mut rng, "x", t0(), 150.0, &plan);
        assert_eq!(point.value, 100.0);
        assert_eq!(point.min_value, 100.0);
        assert_eq!(point.max_value, 100.0);
    }

    #[test]
    fn test_live_reading() {
        let reading = live_reading(&mut rng(), "Humidity_1", t0());
        assert_eq!(reading.id, "Humidity_1");
        assert_eq!(reading.timestamp, t0());
        assert!((0.0..=100.0).contains(&reading.value));
        assert_eq!(reading.status, synthesizer::classify(reading.value));
    }
}
