// Sample synthesizer - noisy readings around a per-class base value
use super::signal::SignalStatus;
use rand::Rng;
use rand_distr::StandardNormal;

pub const MIN_READING: f64 = 0.0;
pub const MAX_READING: f64 = 100.0;

/// Known signal classes, keyed by the id prefix before the first `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalClass {
    Temperature,
    Humidity,
    Pressure,
    Power,
    Flow,
    Unknown,
}

impl SignalClass {
    /// `"Pressure_A1"` and `"Pressure"` both map to `Pressure`. Matching is
    /// case-sensitive; anything else is `Unknown`.
    pub fn from_id(id: &str) -> Self {
        let prefix = id.split('_').next().unwrap_or(id);
        match prefix {
            "Temperature" => SignalClass::Temperature,
            "Humidity" => SignalClass::Humidity,
            "Pressure" => SignalClass::Pressure,
            "Power" => SignalClass::Power,
            "Flow" => SignalClass::Flow,
            _ => SignalClass::Unknown,
        }
    }

    /// Mean of the sample distribution. Pressure and Power sit above the
    /// reading ceiling, so their samples saturate at 100.
    pub fn base_value(&self) -> f64 {
        match self {
            SignalClass::Temperature => 20.0,
            SignalClass::Humidity => 60.0,
            SignalClass::Pressure => 1013.0,
            SignalClass::Power => 500.0,
            SignalClass::Flow => 100.0,
            SignalClass::Unknown => 50.0,
        }
    }
}

pub fn base_value(id: &str) -> f64 {
    SignalClass::from_id(id).base_value()
}

/// Draw one reading from Normal(base_value, variance), clamped to
/// [0, 100] and rounded to 2 decimals.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, base_value: f64, variance: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    round2((base_value + variance * z).clamp(MIN_READING, MAX_READING))
}

pub fn classify(value: f64) -> SignalStatus {
    if value > 90.0 {
        SignalStatus::Critical
    } else if value > 60.0 {
        SignalStatus::High
    } else {
        SignalStatus::Normal
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
