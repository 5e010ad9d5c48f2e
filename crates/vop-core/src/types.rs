//! Match verdict types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Three-way classification of a name pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Score reached the match threshold
    Match,
    /// Score reached the close-match threshold only
    CloseMatch,
    /// Score below both thresholds
    NoMatch,
}

impl MatchStatus {
    /// Classify a score. Both bounds are inclusive.
    pub fn classify(score: f64, match_threshold: f64, close_match_threshold: f64) -> Self {
        if score >= match_threshold {
            Self::Match
        } else if score >= close_match_threshold {
            Self::CloseMatch
        } else {
            Self::NoMatch
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "MATCH",
            Self::CloseMatch => "CLOSE_MATCH",
            Self::NoMatch => "NO_MATCH",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MATCH" => Ok(Self::Match),
            "CLOSE_MATCH" => Ok(Self::CloseMatch),
            "NO_MATCH" => Ok(Self::NoMatch),
            other => Err(format!("unknown match status: {}", other)),
        }
    }
}

/// Scorer that produced the reported score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Initials,
    Levenshtein,
    JaroWinkler,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initials => "initials",
            Self::Levenshtein => "levenshtein",
            Self::JaroWinkler => "jaro_winkler",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one name pair.
///
/// Scores are on a 0-100 scale, rounded to two decimals. On the initials path
/// all three score fields carry the initials score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    pub score: f64,
    pub algorithm: Algorithm,
    pub levenshtein_score: f64,
    pub jaro_winkler_score: f64,
}

impl MatchResult {
    /// Whether the pair was accepted outright
    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::Match
    }
}

/// Round to two decimal places for reporting
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_inclusive_bounds() {
        assert_eq!(MatchStatus::classify(95.0, 95.0, 75.0), MatchStatus::Match);
        assert_eq!(MatchStatus::classify(94.99, 95.0, 75.0), MatchStatus::CloseMatch);
        assert_eq!(MatchStatus::classify(75.0, 95.0, 75.0), MatchStatus::CloseMatch);
        assert_eq!(MatchStatus::classify(74.99, 95.0, 75.0), MatchStatus::NoMatch);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&MatchStatus::CloseMatch).unwrap(),
            "\"CLOSE_MATCH\""
        );
        assert_eq!(
            serde_json::from_str::<MatchStatus>("\"NO_MATCH\"").unwrap(),
            MatchStatus::NoMatch
        );
        assert_eq!("MATCH".parse::<MatchStatus>(), Ok(MatchStatus::Match));
        assert!("match".parse::<MatchStatus>().is_err());
        assert_eq!(MatchStatus::NoMatch.to_string(), "NO_MATCH");
    }

    #[test]
    fn test_algorithm_wire_names() {
        assert_eq!(
            serde_json::to_string(&Algorithm::JaroWinkler).unwrap(),
            "\"jaro_winkler\""
        );
        assert_eq!(Algorithm::Initials.to_string(), "initials");
        assert_eq!(Algorithm::Levenshtein.as_str(), "levenshtein");
    }

    #[test]
    fn test_result_field_names() {
        let result = MatchResult {
            status: MatchStatus::Match,
            score: 100.0,
            algorithm: Algorithm::Initials,
            levenshtein_score: 100.0,
            jaro_winkler_score: 100.0,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "MATCH");
        assert_eq!(value["algorithm"], "initials");
        assert_eq!(value["levenshtein_score"], 100.0);
        assert_eq!(value["jaro_winkler_score"], 100.0);
        assert!(result.is_match());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.592_592_592), 66.59);
        assert_eq!(round2(94.647_058_823), 94.65);
        assert_eq!(round2(100.0), 100.0);
    }
}
