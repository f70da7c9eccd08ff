// Chart request and series models shared by the interpreter, service and renderer
use super::signal::{HistoricalSeries, SignalPoint};
use super::theme::Theme;
use chrono::NaiveDateTime;
use serde::Serialize;

/// How points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisplayMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[default]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Display metadata for one requested signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSpec {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

impl SignalSpec {
    pub fn new(id: String, name: Option<String>, color: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| id.clone());
        Self { id, name, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

/// Everything a chart update needs, as read from the page URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub signals: Vec<SignalSpec>,
    pub range: TimeRange,
    pub live: bool,
    pub theme: Theme,
    pub mode: DisplayMode,
    pub highlight: Option<String>,
}

impl ChartRequest {
    pub fn signal_ids(&self) -> Vec<&str> {
        self.signals.iter().map(|s| s.id.as_str()).collect()
    }
}

/// One signal's history paired with its display metadata.
#[derive(Debug, Clone)]
pub struct SeriesData {
    pub spec: SignalSpec,
    pub points: HistoricalSeries,
}

impl SeriesData {
    pub fn new(spec: SignalSpec, points: Vec<SignalPoint>) -> Self {
        Self { spec, points }
    }
}

#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub theme: Theme,
    pub mode: DisplayMode,
    pub highlight: Option<String>,
    pub series: Vec<SeriesData>,
}
