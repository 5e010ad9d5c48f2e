//! Matcher - orchestrates normalization, initials and dual scoring
//!
//! Decision procedure for one pair:
//! 1. Normalize both names
//! 2. If either carries initials and the initials matcher gives a verdict, report it
//! 3. Otherwise score with Levenshtein and Jaro-Winkler and keep the higher
//!    (ties report Levenshtein)
//! 4. Classify the unrounded score against the configured thresholds

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::initials::match_initials;
use crate::normalize::NormalizedName;
use crate::similarity::{jaro_winkler, levenshtein};
use crate::types::{round2, Algorithm, MatchResult, MatchStatus};

/// Name matcher holding immutable thresholds.
///
/// Calls never mutate the matcher, so one instance can be shared across
/// threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Create a matcher with the given thresholds
    pub fn new(match_threshold: f64, close_match_threshold: f64) -> Result<Self> {
        Self::with_config(MatcherConfig::new(match_threshold, close_match_threshold)?)
    }

    /// Create a matcher from a configuration, validating it first
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Compare two raw names. Total: every pair of strings yields a result.
    pub fn match_names(&self, name1: &str, name2: &str) -> MatchResult {
        let norm1 = NormalizedName::new(name1);
        let norm2 = NormalizedName::new(name2);

        if norm1.has_initials() || norm2.has_initials() {
            match match_initials(&norm1, &norm2) {
                Some(score) => {
                    tracing::debug!(score, "initials verdict");
                    return self.build_result(score, score, score, Algorithm::Initials);
                }
                None => tracing::debug!("initials inconclusive, falling back to general scoring"),
            }
        }

        let lev = levenshtein::similarity(norm1.as_str(), norm2.as_str());
        let jw = jaro_winkler::similarity(norm1.as_str(), norm2.as_str());
        tracing::trace!(levenshtein = lev, jaro_winkler = jw, "general scores");

        let (score, algorithm) = if lev >= jw {
            (lev, Algorithm::Levenshtein)
        } else {
            (jw, Algorithm::JaroWinkler)
        };

        self.build_result(score, lev, jw, algorithm)
    }

    fn build_result(&self, score: f64, lev: f64, jw: f64, algorithm: Algorithm) -> MatchResult {
        let status = MatchStatus::classify(
            score,
            self.config.match_threshold,
            self.config.close_match_threshold,
        );

        MatchResult {
            status,
            score: round2(score),
            algorithm,
            levenshtein_score: round2(lev),
            jaro_winkler_score: round2(jw),
        }
    }
}

/// Compare two names with the default thresholds (95 / 75)
pub fn match_names(name1: &str, name2: &str) -> MatchResult {
    Matcher::default().match_names(name1, name2)
}
