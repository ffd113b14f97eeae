//! Analysis result types
//!
//! These are the wire types consumed by the presentation layer. Field names
//! are part of the contract and must not change.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AlertLevel, CurrentConditions, ThreatLevel};

/// One active outbreak warning (risk score >= 15)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub disease: String,
    pub risk_score: u8,
    pub alert_level: AlertLevel,
    pub alert_color: String,
    /// Human-readable threshold conditions that fired, for explainability
    pub triggers: Vec<String>,
    pub incubation: String,
    pub vector: String,
    pub transmission: String,
    pub is_seasonal: bool,
    pub recommendation: String,
}

/// Per-disease score entry, emitted for every disease regardless of threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendEntry {
    pub disease: String,
    pub risk_score: u8,
    pub alert_level: AlertLevel,
    pub is_seasonal: bool,
}

/// Dominant-risk projection for one forecast day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    pub risks: BTreeMap<String, u8>,
    pub top_disease: String,
    pub top_score: u8,
    pub temp: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Complete result of one analysis call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutbreakAnalysis {
    pub overall_threat: ThreatLevel,
    pub max_risk_score: u8,
    pub total_warnings: usize,
    pub critical_count: usize,
    /// Sorted descending by risk score; equal scores keep catalog order
    pub warnings: Vec<Warning>,
    pub timeline: Vec<TimelineEntry>,
    pub trend_data: Vec<TrendEntry>,
    pub analyzed_at: DateTime<Utc>,
    pub conditions: CurrentConditions,
}
