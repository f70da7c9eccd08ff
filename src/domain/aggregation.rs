// Aggregation planner - picks the level of detail for a historical span
use super::signal::AggregationLevel;
use chrono::TimeDelta;

/// Step length, level name and samples averaged per step for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPlan {
    pub interval_seconds: i64,
    pub level: AggregationLevel,
    pub samples_per_interval: u32,
}

impl AggregationPlan {
    const WEEKLY: Self = Self::new(7 * 24 * 60 * 60, AggregationLevel::Weekly, 7);
    const DAILY: Self = Self::new(24 * 60 * 60, AggregationLevel::Daily, 6);
    const HOURLY: Self = Self::new(60 * 60, AggregationLevel::Hourly, 4);
    const MINUTELY: Self = Self::new(60, AggregationLevel::Minutely, 2);

    const fn new(
        interval_seconds: i64,
        level: AggregationLevel,
        samples_per_interval: u32,
    ) -> Self {
        Self {
            interval_seconds,
            level,
            samples_per_interval,
        }
    }

    pub fn interval(&self) -> TimeDelta {
        TimeDelta::seconds(self.interval_seconds)
    }
}

/// Choose the plan for a span of `duration`.
///
/// Only whole days count: a span of 1 day 23 hours is still "1 day" and
/// therefore minutely. Each threshold is strict, so exactly 365, 7 or 1
/// days falls through to the finer branch.
pub fn plan(duration: TimeDelta) -> AggregationPlan {
    let days = duration.num_days();

    if days > 365 {
        AggregationPlan::WEEKLY
    } else if days > 7 {
        AggregationPlan::DAILY
    } else if days > 1 {
        AggregationPlan::HOURLY
    } else {
        AggregationPlan::MINUTELY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_levels() {
        assert_eq!(plan(TimeDelta::minutes(30)).level, AggregationLevel::Minutely);
        assert_eq!(plan(TimeDelta::days(2)).level, AggregationLevel::Hourly);
        assert_eq!(plan(TimeDelta::days(30)).level, AggregationLevel::Daily);
        assert_eq!(plan(TimeDelta::days(400)).level, AggregationLevel::Weekly);
    }

    #[test]
    fn test_plan_tuples() {
        let weekly = plan(TimeDelta::days(366));
        assert_eq!(weekly.interval_seconds, 604_800);
        assert_eq!(weekly.samples_per_interval, 7);

        let daily = plan(TimeDelta::days(8));
        assert_eq!(daily.interval_seconds, 86_400);
        assert_eq!(daily.samples_per_interval, 6);

        let hourly = plan(TimeDelta::days(2));
        assert_eq!(hourly.interval_seconds, 3_600);
        assert_eq!(hourly.samples_per_interval, 4);

        let minutely = plan(TimeDelta::hours(3));
        assert_eq!(minutely.interval_seconds, 60);
        assert_eq!(minutely.samples_per_interval, 2);
    }

    #[test]
    fn test_plan_exact_boundaries_fall_to_finer_level() {
        assert_eq!(plan(TimeDelta::days(365)).level, AggregationLevel::Daily);
        assert_eq!(plan(TimeDelta::days(7)).level, AggregationLevel::Hourly);
        assert_eq!(plan(TimeDelta::days(1)).level, AggregationLevel::Minutely);
    }

    #[test]
    fn test_plan_ignores_fractional_days() {
        // 25h and 47h59m both truncate to one whole day
        assert_eq!(plan(TimeDelta::hours(25)).level, AggregationLevel::Minutely);
        assert_eq!(
            plan(TimeDelta::hours(47) + TimeDelta::minutes(59)).level,
            AggregationLevel::Minutely
        );
        assert_eq!(plan(TimeDelta::hours(48)).level, AggregationLevel::Hourly);
        assert_eq!(
            plan(TimeDelta::days(7) + TimeDelta::hours(23)).level,
            AggregationLevel::Hourly
        );
        assert_eq!(
            plan(TimeDelta::days(365) + TimeDelta::hours(23)).level,
            AggregationLevel::Daily
        );
    }

    #[test]
    fn test_plan_non_positive_duration_is_minutely() {
        assert_eq!(plan(TimeDelta::zero()).level, AggregationLevel::Minutely);
        assert_eq!(plan(TimeDelta::days(-10)).level, AggregationLevel::Minutely);
    }
}
