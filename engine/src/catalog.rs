//! Disease profile catalog
//!
//! A read-only table of per-disease climatic thresholds. Iteration order is
//! fixed and doubles as the tie-break order wherever two diseases score
//! equally, so the table is an explicit ordered list rather than a map.

use shared::DiseaseProfile;

/// Ordered, immutable set of disease profiles
///
/// [`DiseaseCatalog::default`] builds the canonical surveillance table;
/// synthetic catalogs can be injected for testing via [`DiseaseCatalog::new`].
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    profiles: Vec<DiseaseProfile>,
}

impl DiseaseCatalog {
    /// Build a catalog from an explicit ordered profile list
    pub fn new(profiles: Vec<DiseaseProfile>) -> Self {
        Self { profiles }
    }

    /// Iterate profiles in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &DiseaseProfile> {
        self.profiles.iter()
    }

    /// Number of diseases in the catalog
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog holds no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for DiseaseCatalog {
    fn default() -> Self {
        Self::new(canonical_profiles())
    }
}

fn profile(
    disease: &str,
    temp_range: [f64; 2],
    humidity_min: f64,
    rainfall_min: f64,
    aqi_min: Option<f64>,
    risk_multiplier: f64,
    seasonal_peak: &[u32],
    incubation: &str,
    vector: &str,
    transmission: &str,
) -> DiseaseProfile {
    DiseaseProfile {
        disease: disease.to_string(),
        temp_range,
        humidity_min,
        rainfall_min,
        aqi_min,
        risk_multiplier,
        seasonal_peak: seasonal_peak.to_vec(),
        incubation: incubation.to_string(),
        vector: vector.to_string(),
        transmission: transmission.to_string(),
    }
}

/// The canonical seven-disease threshold table
fn canonical_profiles() -> Vec<DiseaseProfile> {
    vec![
        profile(
            "Malaria",
            [25.0, 40.0],
            65.0,
            80.0,
            None,
            1.3,
            &[6, 7, 8, 9, 10],
            "10-15 days",
            "Anopheles mosquito",
            "Vector-borne",
        ),
        profile(
            "Dengue",
            [25.0, 38.0],
            60.0,
            50.0,
            None,
            1.4,
            &[7, 8, 9, 10, 11],
            "4-10 days",
            "Aedes aegypti",
            "Vector-borne",
        ),
        profile(
            "Typhoid",
            [20.0, 40.0],
            50.0,
            150.0,
            None,
            1.2,
            &[6, 7, 8, 9],
            "6-30 days",
            "Contaminated water/food",
            "Waterborne",
        ),
        profile(
            "Cholera",
            [20.0, 42.0],
            60.0,
            200.0,
            None,
            1.5,
            &[6, 7, 8, 9],
            "2-5 days",
            "Contaminated water",
            "Waterborne",
        ),
        profile(
            "Asthma",
            [0.0, 50.0],
            0.0,
            0.0,
            Some(120.0),
            1.1,
            &[10, 11, 12, 1, 2],
            "Immediate",
            "Airborne pollutants",
            "Environmental",
        ),
        profile(
            "Viral Fever",
            [0.0, 20.0],
            40.0,
            0.0,
            None,
            1.0,
            &[11, 12, 1, 2, 3],
            "1-5 days",
            "Person-to-person",
            "Airborne/Contact",
        ),
        profile(
            "Heat Stroke",
            [38.0, 55.0],
            0.0,
            0.0,
            None,
            1.6,
            &[3, 4, 5, 6],
            "Immediate",
            "Extreme heat",
            "Environmental",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_catalog_order() {
        let catalog = DiseaseCatalog::default();
        let names: Vec<&str> = catalog.iter().map(|p| p.disease.as_str()).collect();
        assert_eq!(
            names,
            [
                "Malaria",
                "Dengue",
                "Typhoid",
                "Cholera",
                "Asthma",
                "Viral Fever",
                "Heat Stroke"
            ]
        );
    }

    #[test]
    fn test_multipliers_at_least_one() {
        for p in DiseaseCatalog::default().iter() {
            assert!(p.risk_multiplier >= 1.0, "{}", p.disease);
        }
    }

    #[test]
    fn test_only_asthma_has_aqi_threshold() {
        for p in DiseaseCatalog::default().iter() {
            if p.disease == "Asthma" {
                assert_eq!(p.aqi_min, Some(120.0));
            } else {
                assert!(p.aqi_min.is_none(), "{}", p.disease);
            }
        }
    }

    #[test]
    fn test_seasonal_peaks_are_valid_months() {
        for p in DiseaseCatalog::default().iter() {
            for &m in &p.seasonal_peak {
                assert!((1..=12).contains(&m), "{} month {}", p.disease, m);
            }
        }
    }

    #[test]
    fn test_temp_ranges_ordered() {
        for p in DiseaseCatalog::default().iter() {
            assert!(p.temp_range[0] <= p.temp_range[1], "{}", p.disease);
        }
    }
}
