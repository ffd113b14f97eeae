//! Alert level and overall threat taxonomies

use serde::{Deserialize, Serialize};

/// Per-disease alert level for one risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "ADVISORY")]
    Advisory,
    #[serde(rename = "ELEVATED")]
    Elevated,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "CRITICAL")]
    Critical,
}

impl AlertLevel {
    /// Classify a 0-100 risk score into an alert band (highest band wins)
    pub fn classify(score: u8) -> Self {
        match score {
            75.. => AlertLevel::Critical,
            55..=74 => AlertLevel::High,
            35..=54 => AlertLevel::Elevated,
            15..=34 => AlertLevel::Advisory,
            _ => AlertLevel::Normal,
        }
    }

    /// Fixed display color for this level
    pub fn color(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "#dc2626",
            AlertLevel::High => "#ef4444",
            AlertLevel::Elevated => "#f59e0b",
            AlertLevel::Advisory => "#3b82f6",
            AlertLevel::Normal => "#10b981",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Normal => write!(f, "Normal"),
            AlertLevel::Advisory => write!(f, "ADVISORY"),
            AlertLevel::Elevated => write!(f, "ELEVATED"),
            AlertLevel::High => write!(f, "HIGH"),
            AlertLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Overall threat band for the worst disease score in a snapshot
///
/// Coarser than [`AlertLevel`]: there is no ELEVATED/ADVISORY tier here,
/// scores between 15 and 54 all map to MODERATE or LOW.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ThreatLevel {
    /// Classify the maximum risk score across all diseases
    pub fn classify(max_score: u8) -> Self {
        match max_score {
            75.. => ThreatLevel::Critical,
            55..=74 => ThreatLevel::High,
            35..=54 => ThreatLevel::Moderate,
            _ => ThreatLevel::Low,
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThreatLevel::Low => write!(f, "LOW"),
            ThreatLevel::Moderate => write!(f, "MODERATE"),
            ThreatLevel::High => write!(f, "HIGH"),
            ThreatLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
