//! String similarity scorers
//!
//! Both scorers work on Unicode scalar values and report on a 0-100 scale:
//!
//! - [`levenshtein`]: edit distance normalized by the longer string
//! - [`jaro_winkler`]: matched characters within a window, boosted by a shared prefix

pub mod jaro_winkler;
pub mod levenshtein;

pub use jaro_winkler::{jaro, WINKLER_PREFIX_CAP, WINKLER_SCALING};
pub use levenshtein::distance;
