//! Property-based tests for the analysis engine
//!
//! Exercises the structural invariants of the result: score bounds, the
//! warning/trend relationship, timeline shape, and the rainfall exclusion
//! rule, over generated conditions and synthetic profiles.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use engine::{
    project_timeline, score_conditions, score_forecast_day, DiseaseCatalog, OutbreakAnalyzer,
};
use shared::{AlertLevel, ConditionsInput, CurrentConditions, DiseaseProfile, ForecastDay};

/// Strategy for plausible-and-beyond temperatures
fn temperature_strategy() -> impl Strategy<Value = f64> {
    -40.0..60.0f64
}

/// Strategy for humidity, deliberately allowed past 100%
fn humidity_strategy() -> impl Strategy<Value = f64> {
    0.0..150.0f64
}

/// Strategy for rainfall amounts
fn rainfall_strategy() -> impl Strategy<Value = f64> {
    0.0..500.0f64
}

/// Strategy for AQI readings
fn aqi_strategy() -> impl Strategy<Value = f64> {
    0.0..500.0f64
}

/// Strategy for calendar months
fn month_strategy() -> impl Strategy<Value = u32> {
    1..=12u32
}

fn conditions_strategy() -> impl Strategy<Value = CurrentConditions> {
    (
        temperature_strategy(),
        humidity_strategy(),
        rainfall_strategy(),
        aqi_strategy(),
    )
        .prop_map(|(temperature, humidity, rainfall, aqi)| CurrentConditions {
            temperature,
            humidity,
            rainfall,
            aqi,
        })
}

/// Strategy for synthetic disease profiles
fn profile_strategy() -> impl Strategy<Value = DiseaseProfile> {
    (
        -10.0..30.0f64,
        0.0..30.0f64,
        0.0..100.0f64,
        prop::option::of(50.0..300.0f64),
        1.0..2.0f64,
        prop::collection::vec(1..=12u32, 0..6),
    )
        .prop_map(
            |(temp_min, temp_span, humidity_min, aqi_min, risk_multiplier, seasonal_peak)| {
                DiseaseProfile {
                    disease: "Synthetic".to_string(),
                    temp_range: [temp_min, temp_min + temp_span],
                    humidity_min,
                    rainfall_min: 0.0,
                    aqi_min,
                    risk_multiplier,
                    seasonal_peak,
                    incubation: "n/a".to_string(),
                    vector: "n/a".to_string(),
                    transmission: "n/a".to_string(),
                }
            },
        )
}

fn forecast_strategy() -> impl Strategy<Value = Vec<ForecastDay>> {
    prop::collection::vec(
        (temperature_strategy(), humidity_strategy(), rainfall_strategy()).prop_map(
            |(temp, humidity, rainfall)| ForecastDay {
                date: None,
                temp,
                humidity,
                rainfall,
            },
        ),
        0..30,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Scores are always integers in [0, 100], for any profile and input
    #[test]
    fn prop_score_bounded(
        conditions in conditions_strategy(),
        mut profile in profile_strategy(),
        rainfall_min in 0.0..300.0f64,
        month in month_strategy()
    ) {
        profile.rainfall_min = rainfall_min;
        let breakdown = score_conditions(&conditions, &profile, month);
        prop_assert!(breakdown.score <= 100);

        let day = ForecastDay {
            date: None,
            temp: conditions.temperature,
            humidity: conditions.humidity,
            rainfall: conditions.rainfall,
        };
        prop_assert!(score_forecast_day(&day, &profile) <= 100);
    }

    /// Every trigger corresponds to points: zero score means no triggers
    #[test]
    fn prop_triggers_match_score(
        conditions in conditions_strategy(),
        profile in profile_strategy(),
        month in month_strategy()
    ) {
        let breakdown = score_conditions(&conditions, &profile, month);
        prop_assert_eq!(breakdown.score == 0, breakdown.triggers.is_empty());
    }

    /// Rainfall never contributes when the profile marks it as not a factor
    #[test]
    fn prop_zero_rainfall_min_excluded(
        conditions in conditions_strategy(),
        mut profile in profile_strategy(),
        month in month_strategy(),
        huge_rainfall in 1000.0..100_000.0f64
    ) {
        profile.rainfall_min = 0.0;

        let dry = CurrentConditions { rainfall: 0.0, ..conditions };
        let flooded = CurrentConditions { rainfall: huge_rainfall, ..conditions };

        let dry_score = score_conditions(&dry, &profile, month).score;
        let flooded_score = score_conditions(&flooded, &profile, month).score;
        prop_assert_eq!(dry_score, flooded_score);
    }

    /// Warnings are exactly the trend entries scoring >= 15, sorted descending
    #[test]
    fn prop_warnings_are_filtered_sorted_trend(
        conditions in conditions_strategy(),
        month in month_strategy()
    ) {
        let analyzer = OutbreakAnalyzer::new();
        let now = Utc.with_ymd_and_hms(2024, month, 10, 0, 0, 0).unwrap();
        let analysis = analyzer
            .analyze(ConditionsInput::from(conditions), &[], now)
            .unwrap();

        let expected: Vec<u8> = {
            let mut scores: Vec<u8> = analysis
                .trend_data
                .iter()
                .map(|t| t.risk_score)
                .filter(|&s| s >= 15)
                .collect();
            scores.sort_by(|a, b| b.cmp(a));
            scores
        };
        let actual: Vec<u8> = analysis.warnings.iter().map(|w| w.risk_score).collect();
        prop_assert_eq!(actual, expected);

        prop_assert_eq!(analysis.total_warnings, analysis.warnings.len());
        prop_assert_eq!(
            analysis.max_risk_score,
            analysis.warnings.first().map(|w| w.risk_score).unwrap_or(0)
        );
        prop_assert_eq!(
            analysis.critical_count,
            analysis
                .warnings
                .iter()
                .filter(|w| w.alert_level == AlertLevel::Critical)
                .count()
        );
    }

    /// Timeline length and order always mirror the forecast input
    #[test]
    fn prop_timeline_mirrors_forecast(
        conditions in conditions_strategy(),
        forecast in forecast_strategy()
    ) {
        let analyzer = OutbreakAnalyzer::new();
        let now = Utc.with_ymd_and_hms(2024, 7, 10, 0, 0, 0).unwrap();
        let analysis = analyzer
            .analyze(ConditionsInput::from(conditions), &forecast, now)
            .unwrap();

        prop_assert_eq!(analysis.timeline.len(), forecast.len());
        for (entry, day) in analysis.timeline.iter().zip(&forecast) {
            prop_assert_eq!(entry.temp, day.temp);
            prop_assert_eq!(entry.humidity, day.humidity);
            prop_assert_eq!(entry.rainfall, day.rainfall);
        }
    }

    /// The day's top score is the maximum of its per-disease map
    #[test]
    fn prop_top_score_is_map_maximum(forecast in forecast_strategy()) {
        let catalog = DiseaseCatalog::default();
        for entry in project_timeline(&forecast, &catalog) {
            let max = entry.risks.values().copied().max().unwrap_or(0);
            prop_assert_eq!(entry.top_score, max);
            prop_assert_eq!(entry.risks[&entry.top_disease], entry.top_score);
        }
    }

    /// Alert classification agrees with the band edges everywhere
    #[test]
    fn prop_alert_bands_consistent(score in 0..=100u8) {
        let level = AlertLevel::classify(score);
        match score {
            75..=100 => prop_assert_eq!(level, AlertLevel::Critical),
            55..=74 => prop_assert_eq!(level, AlertLevel::High),
            35..=54 => prop_assert_eq!(level, AlertLevel::Elevated),
            15..=34 => prop_assert_eq!(level, AlertLevel::Advisory),
            _ => prop_assert_eq!(level, AlertLevel::Normal),
        }
    }
}
