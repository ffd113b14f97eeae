//! Risk scoring
//!
//! Additive point accumulation over independent threshold criteria. Each
//! criterion fires on its own; the disease multiplier is applied once after
//! the additive pass, then the result is rounded and clamped to [0, 100].

use shared::{CurrentConditions, DiseaseProfile, ForecastDay};

/// Snapshot criterion weights
const TEMP_POINTS: u32 = 20;
const HUMIDITY_POINTS: u32 = 15;
const RAINFALL_POINTS: u32 = 20;
const AQI_POINTS: u32 = 25;
const SEASONAL_POINTS: u32 = 15;

/// Forecast-day criterion weights (no AQI or seasonality in forecast data)
const DAY_TEMP_POINTS: u32 = 25;
const DAY_HUMIDITY_POINTS: u32 = 20;
const DAY_RAINFALL_POINTS: u32 = 25;

/// Result of scoring one disease against one set of conditions
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Final score: multiplied, rounded half-up, clamped to [0, 100]
    pub score: u8,
    /// One human-readable entry per criterion that fired
    pub triggers: Vec<String>,
    /// Whether the analysis month falls in the disease's peak season
    pub is_seasonal: bool,
}

/// Score one disease against the current conditions
///
/// `current_month` is the 1-12 month of the analysis instant, supplied by
/// the caller so seasonality stays deterministic.
pub fn score_conditions(
    conditions: &CurrentConditions,
    profile: &DiseaseProfile,
    current_month: u32,
) -> ScoreBreakdown {
    let mut raw = 0u32;
    let mut triggers = Vec::new();

    if conditions.temperature >= profile.temp_range[0]
        && conditions.temperature <= profile.temp_range[1]
    {
        raw += TEMP_POINTS;
        triggers.push(format!(
            "Temperature {}°C within risk range",
            conditions.temperature
        ));
    }

    if conditions.humidity >= profile.humidity_min {
        raw += HUMIDITY_POINTS;
        triggers.push(format!(
            "Humidity {}% exceeds threshold ({}%)",
            conditions.humidity, profile.humidity_min
        ));
    }

    // A rainfall_min of exactly 0 marks rainfall as not a risk factor for
    // this disease, so the criterion is skipped rather than always firing.
    if profile.rainfall_min > 0.0 && conditions.rainfall >= profile.rainfall_min {
        raw += RAINFALL_POINTS;
        triggers.push(format!(
            "Rainfall {}mm exceeds threshold ({}mm)",
            conditions.rainfall, profile.rainfall_min
        ));
    }

    if let Some(aqi_min) = profile.aqi_min {
        if conditions.aqi >= aqi_min {
            raw += AQI_POINTS;
            triggers.push(format!(
                "AQI {} exceeds threshold ({})",
                conditions.aqi, aqi_min
            ));
        }
    }

    let is_seasonal = profile.is_peak_month(current_month);
    if is_seasonal {
        raw += SEASONAL_POINTS;
        triggers.push(format!(
            "Currently in peak season for {}",
            profile.disease
        ));
    }

    ScoreBreakdown {
        score: scale(raw, profile.risk_multiplier),
        triggers,
        is_seasonal,
    }
}

/// Simplified scorer for one forecast day
///
/// Forecast data carries no AQI and no wired-up seasonality signal, so only
/// temperature, humidity, and rainfall contribute.
pub fn score_forecast_day(day: &ForecastDay, profile: &DiseaseProfile) -> u8 {
    let mut raw = 0u32;

    if day.temp >= profile.temp_range[0] && day.temp <= profile.temp_range[1] {
        raw += DAY_TEMP_POINTS;
    }
    if day.humidity >= profile.humidity_min {
        raw += DAY_HUMIDITY_POINTS;
    }
    if profile.rainfall_min > 0.0 && day.rainfall >= profile.rainfall_min {
        raw += DAY_RAINFALL_POINTS;
    }

    scale(raw, profile.risk_multiplier)
}

/// Apply the disease multiplier, round half-up, clamp to [0, 100]
fn scale(raw: u32, multiplier: f64) -> u8 {
    (raw as f64 * multiplier).round().min(100.0) as u8
}
