//! Name normalization and initials detection
//!
//! Normalization steps, in order:
//! 1. Unicode lowercase (Cyrillic and Latin fold alike)
//! 2. Every character that is not a word character, whitespace, or `.` becomes a space
//! 3. Whitespace runs collapse to a single space, ends trimmed
//!
//! Dots survive because they mark initials ("т.", "t.").

/// Word character: alphanumeric in any script, or underscore
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Canonicalize a raw name for comparison.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() || c == '.' {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the name holds a single-letter token abbreviated with a dot.
///
/// Matches a word boundary, exactly one word character, then `.`:
/// "т.г." and "petrenko o." qualify, "тар." does not. Digits are word
/// characters, so "1.5" qualifies as well. Callers pass normalized text.
pub fn has_initials(name: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        let at_boundary = !prev.is_some_and(is_word_char);
        if at_boundary && is_word_char(c) && chars.peek() == Some(&'.') {
            return true;
        }
        prev = Some(c);
    }

    false
}

/// A normalized name, viewable as whitespace-delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Normalize a raw name
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whitespace-delimited tokens in order
    pub fn tokens(&self) -> Vec<&str> {
        self.0.split(' ').filter(|t| !t.is_empty()).collect()
    }

    pub fn has_initials(&self) -> bool {
        has_initials(&self.0)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
