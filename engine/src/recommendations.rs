//! Recommendation catalog
//!
//! Human-readable guidance keyed by (disease, alert level). Lookups never
//! fail: an unknown key falls back to a generic advisory string so a catalog
//! gap can never abort an analysis.

use std::collections::HashMap;

use shared::AlertLevel;

/// Fallback guidance for any (disease, level) pair without a catalog entry
pub const GENERIC_RECOMMENDATION: &str = "Standard health precautions recommended.";

/// Read-only guidance table
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    entries: HashMap<(String, AlertLevel), String>,
}

impl RecommendationCatalog {
    /// Build a catalog from explicit (disease, level, guidance) entries
    pub fn new(entries: impl IntoIterator<Item = (String, AlertLevel, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(disease, level, text)| ((disease, level), text))
                .collect(),
        }
    }

    /// Guidance for a disease at an alert level, or the generic fallback
    pub fn get(&self, disease: &str, level: AlertLevel) -> &str {
        self.entries
            .get(&(disease.to_string(), level))
            .map(String::as_str)
            .unwrap_or(GENERIC_RECOMMENDATION)
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        use AlertLevel::{Advisory, Critical, Elevated, High};

        let table: &[(&str, AlertLevel, &str)] = &[
            (
                "Malaria",
                Critical,
                "Immediate vector control measures needed. Distribute mosquito nets. Deploy fogging operations.",
            ),
            (
                "Malaria",
                High,
                "Intensify mosquito control. Advise use of repellents and long sleeves.",
            ),
            (
                "Malaria",
                Elevated,
                "Monitor mosquito breeding sites. Issue public awareness notices.",
            ),
            (
                "Malaria",
                Advisory,
                "Regular surveillance recommended. Check stagnant water sources.",
            ),
            (
                "Dengue",
                Critical,
                "Emergency: Eliminate all standing water. Hospital preparedness for dengue surge.",
            ),
            (
                "Dengue",
                High,
                "Active surveillance. Fumigation in affected areas. Stock platelet units.",
            ),
            (
                "Dengue",
                Elevated,
                "Community clean-up drives. Awareness campaigns on Aedes prevention.",
            ),
            (
                "Dengue",
                Advisory,
                "Monitor Aedes larvae indices. Regular inspection of water containers.",
            ),
            (
                "Typhoid",
                Critical,
                "Water supply contamination alert. Deploy emergency water purification.",
            ),
            (
                "Typhoid",
                High,
                "Increase water quality testing frequency. Activate boil-water advisory.",
            ),
            (
                "Typhoid",
                Elevated,
                "Monitor water sources. Promote hand hygiene campaigns.",
            ),
            (
                "Typhoid",
                Advisory,
                "Routine water quality checks. Ensure sanitation facilities are functional.",
            ),
            (
                "Cholera",
                Critical,
                "Emergency: Contaminated water supply detected. Deploy ORS kits. Set up treatment centers.",
            ),
            (
                "Cholera",
                High,
                "Activate cholera preparedness plan. Pre-position oral rehydration supplies.",
            ),
            (
                "Cholera",
                Elevated,
                "Strengthen water and sanitation surveillance. Community awareness on safe water.",
            ),
            (
                "Cholera",
                Advisory,
                "Monitor flood-prone areas. Ensure drainage systems are clear.",
            ),
            (
                "Asthma",
                Critical,
                "Hazardous air quality. Advise all sensitive groups to stay indoors. Close schools if needed.",
            ),
            (
                "Asthma",
                High,
                "Unhealthy air. Issue health advisory for respiratory patients.",
            ),
            (
                "Asthma",
                Elevated,
                "Moderate air quality concern. Advise limiting outdoor activities.",
            ),
            (
                "Asthma",
                Advisory,
                "Monitor AQI trends. Remind patients to carry inhalers.",
            ),
            (
                "Viral Fever",
                Critical,
                "Widespread viral activity. Consider school closures. Ramp up health facility capacity.",
            ),
            (
                "Viral Fever",
                High,
                "Significant viral transmission. Promote isolation of symptomatic individuals.",
            ),
            (
                "Viral Fever",
                Elevated,
                "Seasonal viral activity rising. Promote flu vaccination and hygiene.",
            ),
            (
                "Viral Fever",
                Advisory,
                "Normal seasonal fluctuation. Standard precautions apply.",
            ),
            (
                "Heat Stroke",
                Critical,
                "Extreme heat emergency. Open cooling shelters. Issue emergency heat advisory.",
            ),
            (
                "Heat Stroke",
                High,
                "Dangerous heat. Restrict outdoor labor between 11 AM-4 PM.",
            ),
            (
                "Heat Stroke",
                Elevated,
                "Heat stress risk. Advise frequent hydration and shade breaks.",
            ),
            (
                "Heat Stroke",
                Advisory,
                "Rising temperatures. Inform vulnerable populations (elderly, laborers).",
            ),
        ];

        Self::new(
            table
                .iter()
                .map(|(disease, level, text)| (disease.to_string(), *level, text.to_string())),
        )
    }
}
