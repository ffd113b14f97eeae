//! Forecast timeline projection
//!
//! Scores every catalog disease against each forecast day independently and
//! keeps the dominant disease per day. Ties go to whichever disease appears
//! first in catalog order, so repeated runs are deterministic.

use std::collections::BTreeMap;

use shared::{ForecastDay, TimelineEntry};

use crate::catalog::DiseaseCatalog;
use crate::scorer::score_forecast_day;

/// Project the dominant outbreak risk for each forecast day, in input order
///
/// An empty forecast yields an empty timeline. Days without a date are
/// labeled "Day N" (1-based).
pub fn project_timeline(forecast: &[ForecastDay], catalog: &DiseaseCatalog) -> Vec<TimelineEntry> {
    forecast
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let mut risks = BTreeMap::new();
            let mut top_disease = String::new();
            let mut top_score = 0u8;
            let mut first = true;

            for profile in catalog.iter() {
                let score = score_forecast_day(day, profile);
                risks.insert(profile.disease.clone(), score);
                // Strict comparison keeps the earliest catalog entry on ties
                if first || score > top_score {
                    top_disease = profile.disease.clone();
                    top_score = score;
                    first = false;
                }
            }

            let date = match &day.date {
                Some(d) if !d.is_empty() => d.clone(),
                _ => format!("Day {}", index + 1),
            };

            TimelineEntry {
                date,
                risks,
                top_disease,
                top_score,
                temp: day.temp,
                humidity: day.humidity,
                rainfall: day.rainfall,
            }
        })
        .collect()
}
