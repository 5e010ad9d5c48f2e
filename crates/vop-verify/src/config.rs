//! Environment configuration
//!
//! - `VOP_MATCH_THRESHOLD`: score for MATCH, 0-100 (default: 95)
//! - `VOP_CLOSE_MATCH_THRESHOLD`: score for CLOSE_MATCH, 0-100 (default: 75)
//! - `VOP_PARALLEL`: score batches on all cores (default: true)

use vop_core::MatcherConfig;

use crate::error::{Error, Result};

pub const MATCH_THRESHOLD_VAR: &str = "VOP_MATCH_THRESHOLD";
pub const CLOSE_MATCH_THRESHOLD_VAR: &str = "VOP_CLOSE_MATCH_THRESHOLD";
pub const PARALLEL_VAR: &str = "VOP_PARALLEL";

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyConfig {
    pub matcher: MatcherConfig,
    pub parallel: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            parallel: true,
        }
    }
}

impl VerifyConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables take their defaults; thresholds are validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let match_threshold = parse_var(&lookup, MATCH_THRESHOLD_VAR, parse_f64)?
            .unwrap_or(defaults.matcher.match_threshold);
        let close_match_threshold = parse_var(&lookup, CLOSE_MATCH_THRESHOLD_VAR, parse_f64)?
            .unwrap_or(defaults.matcher.close_match_threshold);
        let parallel = parse_var(&lookup, PARALLEL_VAR, parse_bool)?.unwrap_or(defaults.parallel);

        Ok(Self {
            matcher: MatcherConfig::new(match_threshold, close_match_threshold)?,
            parallel,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, parse: fn(&str) -> Option<T>) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    parse(trimmed)
        .map(Some)
        .ok_or(Error::Env { var, value: raw })
}

fn parse_f64(s: &str) -> Option<f64> {
    s.parse().ok()
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
