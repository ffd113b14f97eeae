//! Shared types and models for the Outbreak Risk Analysis Engine
//!
//! This crate contains the data model consumed and produced by the engine:
//! climate condition inputs, disease profiles, alert taxonomies, and the
//! analysis result types serialized to the presentation layer.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
