//! Input validation for the Outbreak Risk Analysis Engine
//!
//! The engine is total over any well-formed numeric input, including values
//! outside physical plausibility (a humidity of 150% is scored as given).
//! Validation here is purely structural: every required field must be
//! present and finite.

use thiserror::Error;

use crate::models::{ConditionsInput, CurrentConditions};

/// A structural problem with one input field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field '{field}': {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate raw conditions into an analysis-ready value
///
/// Fails on the first missing or non-finite field; no defaults are
/// substituted.
pub fn validate_conditions(input: &ConditionsInput) -> Result<CurrentConditions, FieldError> {
    Ok(CurrentConditions {
        temperature: require_finite("temperature", input.temperature)?,
        humidity: require_finite("humidity", input.humidity)?,
        rainfall: require_finite("rainfall", input.rainfall)?,
        aqi: require_finite("aqi", input.aqi)?,
    })
}

fn require_finite(field: &'static str, value: Option<f64>) -> Result<f64, FieldError> {
    match value {
        None => Err(FieldError {
            field,
            message: "field is required",
        }),
        Some(v) if !v.is_finite() => Err(FieldError {
            field,
            message: "field must be a finite number",
        }),
        Some(v) => Ok(v),
    }
}
