//! Disease profile model

use serde::{Deserialize, Serialize};

/// Climatic trigger thresholds and metadata for one disease
///
/// Catalog entries are built once and never mutated at runtime; updating the
/// thresholds means shipping a new catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub disease: String,
    /// Closed temperature interval [min, max] in °C
    pub temp_range: [f64; 2],
    /// Minimum humidity % for the humidity trigger
    pub humidity_min: f64,
    /// Rainfall threshold in mm; 0 means rainfall is not a risk factor
    /// for this disease and never contributes points
    pub rainfall_min: f64,
    /// AQI threshold; only respiratory/airborne-pollutant diseases define it
    pub aqi_min: Option<f64>,
    /// Disease-specific amplification (>= 1), applied once after the
    /// additive pass and before clamping
    pub risk_multiplier: f64,
    /// Months (1-12) during which the seasonal bonus applies
    pub seasonal_peak: Vec<u32>,
    pub incubation: String,
    pub vector: String,
    pub transmission: String,
}

impl DiseaseProfile {
    /// Whether `month` (1-12) falls in this disease's peak season
    pub fn is_peak_month(&self, month: u32) -> bool {
        self.seasonal_peak.contains(&month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(seasonal_peak: Vec<u32>) -> DiseaseProfile {
        DiseaseProfile {
            disease: "Test".to_string(),
            temp_range: [20.0, 30.0],
            humidity_min: 60.0,
            rainfall_min: 50.0,
            aqi_min: None,
            risk_multiplier: 1.0,
            seasonal_peak,
            incubation: "n/a".to_string(),
            vector: "n/a".to_string(),
            transmission: "n/a".to_string(),
        }
    }

    #[test]
    fn test_peak_month_membership() {
        let p = profile(vec![6, 7, 8]);
        assert!(p.is_peak_month(6));
        assert!(p.is_peak_month(8));
        assert!(!p.is_peak_month(5));
        assert!(!p.is_peak_month(12));
    }

    #[test]
    fn test_empty_peak_never_matches() {
        let p = profile(vec![]);
        for month in 1..=12 {
            assert!(!p.is_peak_month(month));
        }
    }
}
