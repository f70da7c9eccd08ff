// Query interpreter - turns the page's URL query string into a chart request
use crate::domain::chart::{ChartRequest, DisplayMode, SignalSpec, TimeRange};
use crate::domain::theme::Theme;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid boolean for `{param}`: {value:?}")]
    InvalidBool { param: &'static str, value: String },
    #[error("invalid timestamp for `{param}`: {value:?}")]
    InvalidTimestamp { param: &'static str, value: String },
    #[error("invalid hour count {0:?}, expected a positive integer up to a century")]
    InvalidHours(String),
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
    #[error("unknown display mode {0:?}")]
    UnknownMode(String),
    #[error("range {start} .. {end} is longer than a century")]
    RangeTooLong {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("only one of `start`/`end` given")]
    HalfOpenRange,
    #[error("could not decode query component {0:?}")]
    Undecodable(String),
}

/// Fallbacks for parameters that are missing or malformed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryDefaults {
    pub range_hours: i64,
    pub theme: Theme,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            range_hours: 24,
            theme: Theme::Light,
        }
    }
}

/// Decoded `key=value` pairs in their original order
fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match (decode(key), decode(value)) {
                (Ok(k), Ok(v)) => Some((k, v)),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!("Ignoring query pair: {}", e);
                    None
                }
            }
        })
        .collect()
}

fn decode(component: &str) -> Result<String, QueryError> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|_| QueryError::Undecodable(component.to_string()))
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim)
}

pub fn parse_bool(param: &'static str, value: &str) -> Result<bool, QueryError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(QueryError::InvalidBool {
            param,
            value: value.to_string(),
        }),
    }
}

/// Accepts `2024-01-01T06:30:00`, with optional fractional seconds, a
/// space instead of `T`, minutes-only precision, or a bare date
pub fn parse_timestamp(param: &'static str, value: &str) -> Result<NaiveDateTime, QueryError> {
    let value = value.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| QueryError::InvalidTimestamp {
            param,
            value: value.to_string(),
        })
}

/// Longest window `hours` may ask for, about a century
const MAX_HOURS: i64 = 100 * 366 * 24;

pub fn parse_hours(value: &str) -> Result<i64, QueryError> {
    match value.trim().parse::<i64>() {
        Ok(hours) if (1..=MAX_HOURS).contains(&hours) => Ok(hours),
        _ => Err(QueryError::InvalidHours(value.to_string())),
    }
}

pub fn parse_mode(value: &str) -> Result<DisplayMode, QueryError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lines" | "line" => Ok(DisplayMode::Lines),
        "markers" | "marker" => Ok(DisplayMode::Markers),
        "lines+markers" | "lines markers" | "both" => Ok(DisplayMode::LinesMarkers),
        _ => Err(QueryError::UnknownMode(value.to_string())),
    }
}

/// Interpret `query` relative to `now`.
///
/// Never fails: every malformed parameter is logged and replaced by its
/// default, so the core only sees well-formed requests.
pub fn interpret(
    query: Option<&str>,
    now: NaiveDateTime,
    defaults: QueryDefaults,
) -> ChartRequest {
    let pairs = query.map(parse_pairs).unwrap_or_default();

    let mut ids: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut colors: Vec<String> = Vec::new();
    let mut live = false;
    let mut start = None;
    let mut end = None;
    let mut hours = None;
    let mut theme = defaults.theme;
    let mut mode = DisplayMode::default();
    let mut highlight = None;

    let mut push_id = |id: &str| {
        if !id.is_empty() && !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    };

    for (key, value) in &pairs {
        let result = match key.as_str() {
            "signal_id" => {
                push_id(value.trim());
                Ok(())
            }
            "signals" => {
                split_list(value).for_each(&mut push_id);
                Ok(())
            }
            "names" => {
                names = split_list(value).map(str::to_string).collect();
                Ok(())
            }
            "colors" => {
                colors = split_list(value).map(str::to_string).collect();
                Ok(())
            }
            "live" => parse_bool("live", value).map(|v| live = v),
            "start" => parse_timestamp("start", value).map(|v| start = Some(v)),
            "end" => parse_timestamp("end", value).map(|v| end = Some(v)),
            "hours" => parse_hours(value).map(|v| hours = Some(v)),
            "theme" => Theme::from_name(value)
                .map(|v| theme = v)
                .ok_or_else(|| QueryError::UnknownTheme(value.to_string())),
            "mode" => parse_mode(value).map(|v| mode = v),
            "highlight" => {
                let id = value.trim();
                highlight = (!id.is_empty()).then(|| id.to_string());
                Ok(())
            }
            other => {
                tracing::debug!("Ignoring unknown query parameter {}", other);
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!("Malformed query parameter, using default: {}", e);
        }
    }

    let range = resolve_range(start, end, hours, now, defaults.range_hours);

    let signals = ids
        .into_iter()
        .enumerate()
        .map(|(index, id)| {
            let name = names.get(index).filter(|n| !n.is_empty()).cloned();
            let color = colors.get(index).filter(|c| !c.is_empty()).cloned();
            SignalSpec::new(id, name, color)
        })
        .collect();

    ChartRequest {
        signals,
        range,
        live,
        theme,
        mode,
        highlight,
    }
}

/// Explicit `start`/`end` win, then `hours` back from `now`, then the
/// default window. An inverted explicit range is kept as-is and yields
/// empty series downstream; one longer than `MAX_HOURS` is dropped.
fn resolve_range(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    hours: Option<i64>,
    now: NaiveDateTime,
    default_hours: i64,
) -> TimeRange {
    let explicit = match (start, end) {
        (Some(start), Some(end)) if end - start > TimeDelta::hours(MAX_HOURS) => {
            Err(QueryError::RangeTooLong { start, end })
        }
        (Some(start), Some(end)) => return TimeRange::new(start, end),
        (None, None) => Ok(()),
        _ => Err(QueryError::HalfOpenRange),
    };
    if let Err(e) = explicit {
        tracing::warn!("Malformed query parameter, using default: {}", e);
    }

    let hours = hours.unwrap_or(default_hours);
    let fallback = QueryDefaults::default().range_hours;
    let start = TimeDelta::try_hours(hours)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or_else(|| now - TimeDelta::hours(fallback));
    TimeRange::new(start, now)
}
