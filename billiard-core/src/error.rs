//! Error types for the simulation core and the configuration loader.

use thiserror::Error;

/// Failures raised while building or stepping a table.
///
/// None of these are retried. The simulation is deterministic, so every
/// variant points at a modelling or input problem.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A contact pair was not approaching when it was resolved.
    #[error("bodies {first} and {second} are in contact but not approaching (dot = {approach})")]
    InvariantViolation {
        first: usize,
        second: usize,
        approach: f64,
    },

    /// A zero-length vector showed up where a direction was required.
    #[error("degenerate geometry: {context}")]
    DegenerateGeometry { context: String },

    #[error("no body at index {index} (table holds {len})")]
    MissingBody { index: usize, len: usize },

    #[error("shot did not come to rest within {limit} steps")]
    StepLimitExceeded { limit: u64 },

    #[error("invalid physics configuration: {0}")]
    InvalidConfig(String),
}

/// Failures raised while loading YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
