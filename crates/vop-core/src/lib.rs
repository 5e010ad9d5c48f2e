//! VoP Name Matching Engine
//!
//! Decides whether a payment instruction's payee name and the bank's on-file
//! account-holder name denote the same person. Tolerates initials,
//! transliteration variance and typos; rejects genuinely different names.
//!
//! # Pipeline
//!
//! ```text
//! raw names -> normalize -> initials? --verdict--> classify
//!                               |
//!                               +--no verdict--> max(levenshtein, jaro_winkler) -> classify
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - score large batches on the rayon pool
//!
//! # Example
//!
//! ```rust
//! use vop_core::{match_names, Algorithm, MatchStatus, Matcher};
//!
//! let result = match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "ШЕВЧЕНКО Т.Г.");
//! assert_eq!(result.status, MatchStatus::Match);
//! assert_eq!(result.algorithm, Algorithm::Initials);
//!
//! // Inverted thresholds are a configuration error
//! assert!(Matcher::new(70.0, 80.0).is_err());
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod initials;
pub mod matcher;
pub mod normalize;
pub mod similarity;
mod types;

// Re-export main types at crate root
pub use batch::PARALLEL_THRESHOLD;
pub use config::{MatcherConfig, DEFAULT_CLOSE_MATCH_THRESHOLD, DEFAULT_MATCH_THRESHOLD};
pub use error::ConfigError;
pub use initials::{match_initials, SURNAME_SIMILARITY_THRESHOLD};
pub use matcher::{match_names, Matcher};
pub use normalize::{has_initials, normalize, NormalizedName};
pub use types::{Algorithm, MatchResult, MatchStatus};
