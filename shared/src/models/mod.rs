//! Domain models for the Outbreak Risk Analysis Engine

mod alert;
mod analysis;
mod conditions;
mod profile;

pub use alert::*;
pub use analysis::*;
pub use conditions::*;
pub use profile::*;
