//! Jaro-Winkler similarity
//!
//! Characters match within a window of `max(len) / 2 - 1` positions, never
//! narrower than 1. The Winkler boost, `jaro + prefix * WINKLER_SCALING * (1 - jaro)`
//! with the shared prefix capped at [`WINKLER_PREFIX_CAP`], applies at every
//! Jaro score.

/// Shared prefix length counted by the Winkler boost is capped at this value
pub const WINKLER_PREFIX_CAP: usize = 4;

/// Weight of each shared prefix character in the Winkler boost
pub const WINKLER_SCALING: f64 = 0.1;

/// Jaro similarity in `[0, 1]`.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1).max(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());

        for j in start..end {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters of each side in original order, compared pairwise
    let a_seq = a.iter().zip(&a_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count() / 2;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64) / m) / 3.0
}

/// Length of the shared prefix, capped at [`WINKLER_PREFIX_CAP`]
fn common_prefix_len(s1: &str, s2: &str) -> usize {
    s1.chars()
        .zip(s2.chars())
        .take_while(|(x, y)| x == y)
        .take(WINKLER_PREFIX_CAP)
        .count()
}

/// Jaro-Winkler similarity on a 0-100 scale.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let jaro = jaro(s1, s2);
    let prefix = common_prefix_len(s1, s2) as f64;
    (jaro + prefix * WINKLER_SCALING * (1.0 - jaro)) * 100.0
}
