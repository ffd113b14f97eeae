//! Climate condition inputs

use serde::{Deserialize, Serialize};

/// One instantaneous climate reading, validated and ready for analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    /// Air quality index
    pub aqi: f64,
}

/// Raw conditions as supplied by the caller, before validation
///
/// Every field is optional so that a structurally incomplete payload can be
/// rejected with a field-level error instead of being zero-defaulted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConditionsInput {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub aqi: Option<f64>,
}

impl From<CurrentConditions> for ConditionsInput {
    fn from(c: CurrentConditions) -> Self {
        Self {
            temperature: Some(c.temperature),
            humidity: Some(c.humidity),
            rainfall: Some(c.rainfall),
            aqi: Some(c.aqi),
        }
    }
}

/// One forecast day, in caller-supplied order
///
/// Forecast data carries no AQI reading. A missing date is rendered as
/// "Day N" in the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(default)]
    pub date: Option<String>,
    pub temp: f64,
    pub humidity: f64,
    pub rainfall: f64,
}
