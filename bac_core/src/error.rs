//! Error types for the bac_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bac_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Drink type key not present in the standard drink table
    #[error("Unknown drink type: {0}")]
    UnknownDrinkType(String),

    /// Food type key not present in the gastric table
    #[error("Unknown food type: {0}")]
    UnknownFoodType(String),

    /// Sex key other than male/female
    #[error("Unknown sex: {0}")]
    UnknownSex(String),
}
