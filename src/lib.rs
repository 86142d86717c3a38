//! Contributor confidence scoring.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod interpret;
pub mod logging;
pub mod policy;
pub mod report;
pub mod score;
pub mod snapshot;
pub mod types;

pub use engine::{ConfidenceEngine, ScoredRecord};
pub use error::ConfidenceError;
pub use interpret::Band;
pub use types::scoring::{AlgorithmWeights, ConfidenceScore, WeightPreset};
pub use types::signals::ContributorSignalInput;
