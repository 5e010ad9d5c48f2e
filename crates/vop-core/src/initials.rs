//! Structural matching when one name is abbreviated to initials
//!
//! The first token of each name is the surname and must agree (exactly, or
//! with Levenshtein similarity of at least [`SURNAME_SIMILARITY_THRESHOLD`]).
//! The remaining components of the abbreviated name are paired positionally
//! with the full name's components:
//!
//! ```text
//! шевченко  тарас  григорович
//! шевченко  т.     г.
//!           ^ first letter   ^ first letter
//! ```
//!
//! Compact initials ("т.г.") are split into one component per dot before pairing.

use crate::normalize::NormalizedName;
use crate::similarity::levenshtein;

/// Minimum surname similarity for the initials path to give a verdict
pub const SURNAME_SIMILARITY_THRESHOLD: f64 = 90.0;

/// Split the tokens after the surname into name components.
///
/// "т.г." becomes ["т.", "г."]; a token without an interior dot is kept whole.
fn tail_components<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    tokens
        .iter()
        .skip(1)
        .copied()
        .flat_map(|token| token.split_inclusive('.'))
        .collect()
}

/// True when an abbreviated component agrees with a full component.
///
/// A single letter must equal the first letter; a longer stem ("тар") must
/// equal the prefix of the same length ("тарас").
fn component_matches(abbreviated: &str, full: &str) -> bool {
    let initial = abbreviated.replace('.', "");
    let initial = initial.trim();
    let len = initial.chars().count();

    if len == 1 {
        full.chars().next().is_some_and(|c| initial.starts_with(c))
    } else {
        full.chars().take(len).eq(initial.chars())
    }
}

/// Compare a full name against an abbreviated one.
///
/// Returns `None` when the names cannot be reconciled as a full/abbreviated
/// pair: an empty side, both or neither side abbreviated, or surnames too far
/// apart. `None` means "fall through to general scoring", never a failure.
pub fn match_initials(name1: &NormalizedName, name2: &NormalizedName) -> Option<f64> {
    let tokens1 = name1.tokens();
    let tokens2 = name2.tokens();
    if tokens1.is_empty() || tokens2.is_empty() {
        return None;
    }

    let (full, abbreviated) = match (name1.has_initials(), name2.has_initials()) {
        (true, false) => (tokens2, tokens1),
        (false, true) => (tokens1, tokens2),
        _ => return None,
    };

    if full[0] != abbreviated[0] {
        let surname_score = levenshtein::similarity(full[0], abbreviated[0]);
        if surname_score < SURNAME_SIMILARITY_THRESHOLD {
            tracing::trace!(surname_score, "surnames differ, no initials verdict");
            return None;
        }
    }

    let full_tail = tail_components(&full);
    let abbreviated_tail = tail_components(&abbreviated);

    if abbreviated_tail.is_empty() {
        return Some(100.0);
    }

    // Initials with nothing to compare against on the full side
    if full_tail.is_empty() {
        return Some(0.0);
    }

    // Extra components on the full side are ignored
    let paired = full_tail.len().min(abbreviated_tail.len());
    let matches = abbreviated_tail
        .iter()
        .zip(&full_tail)
        .filter(|(a, f)| component_matches(a, f))
        .count();

    if matches == paired {
        Some(100.0)
    } else {
        Some(matches as f64 / paired as f64 * 100.0)
    }
}
