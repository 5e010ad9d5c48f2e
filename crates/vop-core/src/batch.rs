//! Batch verification
//!
//! Pairs are independent, so large batches are scored on the rayon pool when
//! the `parallel` feature is enabled. Results keep input order either way.

use crate::matcher::Matcher;
use crate::types::MatchResult;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batches smaller than this are scored sequentially
pub const PARALLEL_THRESHOLD: usize = 64;

impl Matcher {
    /// Score every pair, returning results in input order
    pub fn match_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<MatchResult>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        tracing::debug!(pairs = pairs.len(), "scoring batch");
        self.score_pairs(pairs)
    }

    #[cfg(feature = "parallel")]
    fn score_pairs<A, B>(&self, pairs: &[(A, B)]) -> Vec<MatchResult>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        if pairs.len() >= PARALLEL_THRESHOLD {
            pairs
                .par_iter()
                .map(|(a, b)| self.match_names(a.as_ref(), b.as_ref()))
                .collect()
        } else {
            self.score_sequential(pairs)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_pairs<A, B>(&self, pairs: &[(A, B)]) -> Vec<MatchResult>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        self.score_sequential(pairs)
    }

    fn score_sequential<A, B>(&self, pairs: &[(A, B)]) -> Vec<MatchResult>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        pairs
            .iter()
            .map(|(a, b)| self.match_names(a.as_ref(), b.as_ref()))
            .collect()
    }
}
