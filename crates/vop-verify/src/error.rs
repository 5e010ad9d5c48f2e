//! Error types for the verification tool

use thiserror::Error;

/// Result type alias using the verification error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input line that is not a valid name pair
    #[error("invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Threshold configuration error
    #[error("configuration error: {0}")]
    Config(#[from] vop_core::ConfigError),

    /// Environment variable present but unparseable
    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },
}
