//! Outbreak Risk Analysis Engine
//!
//! A table-driven, multi-criteria threshold evaluator over climate
//! measurements. Given a current reading and an optional short-horizon
//! forecast, it produces ranked, explainable outbreak warnings, a
//! per-forecast-day timeline of the dominant risk, and an overall threat
//! classification.
//!
//! The engine is a pure, synchronous computation: the catalogs are
//! read-only, no state is held between calls, and the analysis instant is an
//! explicit parameter so results are deterministic.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use engine::OutbreakAnalyzer;
//! use shared::ConditionsInput;
//!
//! let analyzer = OutbreakAnalyzer::new();
//! let conditions = ConditionsInput {
//!     temperature: Some(30.0),
//!     humidity: Some(70.0),
//!     rainfall: Some(90.0),
//!     aqi: Some(100.0),
//! };
//! let now = Utc.with_ymd_and_hms(2024, 8, 15, 12, 0, 0).unwrap();
//! let analysis = analyzer.analyze(conditions, &[], now).unwrap();
//! assert_eq!(analysis.trend_data.len(), 7);
//! ```

pub mod analyzer;
pub mod catalog;
pub mod error;
pub mod recommendations;
pub mod scorer;
pub mod timeline;

pub use analyzer::OutbreakAnalyzer;
pub use catalog::DiseaseCatalog;
pub use error::{EngineError, EngineResult};
pub use recommendations::{RecommendationCatalog, GENERIC_RECOMMENDATION};
pub use scorer::{score_conditions, score_forecast_day, ScoreBreakdown};
pub use timeline::project_timeline;
