//! Snapshot analysis service
//!
//! Runs the scorer and alert classifier over every catalog disease for the
//! current conditions, merges in the forecast timeline, and derives the
//! overall threat classification.

use chrono::{DateTime, Datelike, Utc};

use shared::{
    AlertLevel, ConditionsInput, ForecastDay, OutbreakAnalysis, ThreatLevel, TrendEntry, Warning,
};

use crate::catalog::DiseaseCatalog;
use crate::error::EngineResult;
use crate::recommendations::RecommendationCatalog;
use crate::scorer::score_conditions;
use crate::timeline::project_timeline;

/// Minimum score for a disease to surface as a warning
const WARNING_THRESHOLD: u8 = 15;

/// Outbreak risk analyzer
///
/// Holds the read-only catalogs; safe to share across threads. Each call to
/// [`OutbreakAnalyzer::analyze`] is independent and carries no state over.
#[derive(Debug, Clone, Default)]
pub struct OutbreakAnalyzer {
    profiles: DiseaseCatalog,
    recommendations: RecommendationCatalog,
}

impl OutbreakAnalyzer {
    /// Create an analyzer over the canonical catalogs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer over explicit catalogs, for synthetic profiles
    pub fn with_catalogs(profiles: DiseaseCatalog, recommendations: RecommendationCatalog) -> Self {
        Self {
            profiles,
            recommendations,
        }
    }

    /// Analyze current conditions and an optional forecast
    ///
    /// `now` is the analysis instant: it drives the seasonal bonus and is
    /// echoed as `analyzedAt`, so identical inputs always yield identical
    /// output. Fails only on structurally invalid conditions; no partial
    /// result is produced in that case.
    pub fn analyze(
        &self,
        conditions: ConditionsInput,
        forecast: &[ForecastDay],
        now: DateTime<Utc>,
    ) -> EngineResult<OutbreakAnalysis> {
        let conditions = shared::validate_conditions(&conditions)?;
        let current_month = now.month();

        let mut warnings = Vec::new();
        let mut trend_data = Vec::with_capacity(self.profiles.len());

        for profile in self.profiles.iter() {
            let breakdown = score_conditions(&conditions, profile, current_month);
            let alert_level = AlertLevel::classify(breakdown.score);

            if breakdown.score >= WARNING_THRESHOLD {
                warnings.push(Warning {
                    disease: profile.disease.clone(),
                    risk_score: breakdown.score,
                    alert_level,
                    alert_color: alert_level.color().to_string(),
                    triggers: breakdown.triggers,
                    incubation: profile.incubation.clone(),
                    vector: profile.vector.clone(),
                    transmission: profile.transmission.clone(),
                    is_seasonal: breakdown.is_seasonal,
                    recommendation: self
                        .recommendations
                        .get(&profile.disease, alert_level)
                        .to_string(),
                });
            }

            trend_data.push(TrendEntry {
                disease: profile.disease.clone(),
                risk_score: breakdown.score,
                alert_level,
                is_seasonal: breakdown.is_seasonal,
            });
        }

        // Stable sort: equal scores keep catalog order
        warnings.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

        let max_risk_score = warnings.first().map(|w| w.risk_score).unwrap_or(0);
        let critical_count = warnings
            .iter()
            .filter(|w| w.alert_level == AlertLevel::Critical)
            .count();

        let timeline = project_timeline(forecast, &self.profiles);

        tracing::debug!(
            diseases = self.profiles.len(),
            warnings = warnings.len(),
            max_risk_score,
            forecast_days = forecast.len(),
            "outbreak analysis complete"
        );

        Ok(OutbreakAnalysis {
            overall_threat: ThreatLevel::classify(max_risk_score),
            max_risk_score,
            total_warnings: warnings.len(),
            critical_count,
            warnings,
            timeline,
            trend_data,
            analyzed_at: now,
            conditions,
        })
    }
}
