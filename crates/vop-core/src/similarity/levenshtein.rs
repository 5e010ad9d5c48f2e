//! Levenshtein edit-distance similarity

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `s1` into `s2`. Counts Unicode scalar values, not bytes.
#[inline]
pub fn distance(s1: &str, s2: &str) -> usize {
    strsim::levenshtein(s1, s2)
}

/// Edit-distance similarity on a 0-100 scale.
///
/// `(1 - distance / max_len) * 100`, clamped; two empty strings score 100.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let dist = distance(s1, s2);
    ((1.0 - dist as f64 / max_len as f64) * 100.0).clamp(0.0, 100.0)
}
