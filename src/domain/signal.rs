// Signal reading domain models
use chrono::NaiveDateTime;
use serde::Serialize;

/// Severity of a raw sample or of an aggregate point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Normal,
    High,
    Critical,
}

impl SignalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Normal => "normal",
            SignalStatus::High => "high",
            SignalStatus::Critical => "critical",
        }
    }
}

/// Granularity chosen for a historical span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationLevel {
    Minutely,
    Hourly,
    Daily,
    Weekly,
}

impl AggregationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationLevel::Minutely => "minutely",
            AggregationLevel::Hourly => "hourly",
            AggregationLevel::Daily => "daily",
            AggregationLevel::Weekly => "weekly",
        }
    }
}

/// One aggregated reading covering a single step of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPoint {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub status: SignalStatus,
    pub aggregation_level: AggregationLevel,
    pub sample_count: u32,
    pub min_value: f64,
    pub max_value: f64,
}

/// Time-ascending aggregate points for one signal id.
pub type HistoricalSeries = Vec<SignalPoint>;

/// A single raw sample stamped with the instant it was drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveReading {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub status: SignalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_signal_point_json_shape() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap();
        let point = SignalPoint {
            id: "Temperature_01".to_string(),
            timestamp,
            value: 21.5,
            status: SignalStatus::Normal,
            aggregation_level: AggregationLevel::Hourly,
            sample_count: 4,
            min_value: 18.25,
            max_value: 24.0,
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["id"], "Temperature_01");
        assert_eq!(json["timestamp"], "2024-01-01T06:30:00");
        assert_eq!(json["status"], "normal");
        assert_eq!(json["aggregationLevel"], "hourly");
        assert_eq!(json["sampleCount"], 4);
        assert_eq!(json["minValue"], 18.25);
        assert_eq!(json["maxValue"], 24.0);
    }
}
