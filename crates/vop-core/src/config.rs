//! Matcher configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Score at or above which two names are reported as `MATCH`
pub const DEFAULT_MATCH_THRESHOLD: f64 = 95.0;

/// Score at or above which two names are reported as `CLOSE_MATCH`
pub const DEFAULT_CLOSE_MATCH_THRESHOLD: f64 = 75.0;

/// Classification thresholds on the 0-100 score scale.
///
/// Invariant: `0 <= close_match_threshold <= match_threshold <= 100`.
/// Deserialized values are not checked until [`MatcherConfig::validate`] runs,
/// which [`crate::Matcher::with_config`] does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub match_threshold: f64,
    pub close_match_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            close_match_threshold: DEFAULT_CLOSE_MATCH_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    /// Build a validated configuration
    pub fn new(match_threshold: f64, close_match_threshold: f64) -> Result<Self> {
        let config = Self {
            match_threshold,
            close_match_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check range and ordering of both thresholds
    pub fn validate(&self) -> Result<()> {
        check_range("match_threshold", self.match_threshold)?;
        check_range("close_match_threshold", self.close_match_threshold)?;

        if self.close_match_threshold > self.match_threshold {
            return Err(ConfigError::ThresholdOrder {
                close_match: self.close_match_threshold,
                matched: self.match_threshold,
            });
        }

        Ok(())
    }
}

fn check_range(name: &'static str, value: f64) -> Result<()> {
    // NaN fails the containment check as well
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}
