//! Error types for matcher configuration

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a matcher configuration.
///
/// Matching itself never fails; these are surfaced at construction time only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold is NaN, infinite, or outside `[0, 100]`
    #[error("{name} must be within [0, 100], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// Close-match threshold is stricter than the match threshold
    #[error("close_match_threshold ({close_match}) must not exceed match_threshold ({matched})")]
    ThresholdOrder { close_match: f64, matched: f64 },
}
