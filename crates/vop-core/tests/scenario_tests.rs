//! End-to-end verdicts for representative payee/account name pairs

use pretty_assertions::assert_eq;
use vop_core::{match_names, Algorithm, ConfigError, MatchResult, MatchStatus, Matcher};

#[test]
fn test_identical_full_names() {
    let result = match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ");
    assert_eq!(
        result,
        MatchResult {
            status: MatchStatus::Match,
            score: 100.0,
            algorithm: Algorithm::Levenshtein,
            levenshtein_score: 100.0,
            jaro_winkler_score: 100.0,
        }
    );
}

#[test]
fn test_compact_initials() {
    let result = match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "ШЕВЧЕНКО Т.Г.");
    assert_eq!(
        result,
        MatchResult {
            status: MatchStatus::Match,
            score: 100.0,
            algorithm: Algorithm::Initials,
            levenshtein_score: 100.0,
            jaro_winkler_score: 100.0,
        }
    );
}

#[test]
fn test_spaced_initials_either_order() {
    let a = match_names("ПЕТРЕНКО О. І.", "Петренко Олена Іванівна");
    let b = match_names("Петренко Олена Іванівна", "ПЕТРЕНКО О. І.");
    assert_eq!(a, b);
    assert_eq!(a.algorithm, Algorithm::Initials);
    assert_eq!(a.status, MatchStatus::Match);
}

#[test]
fn test_single_deletion_in_patronymic() {
    // One deletion over twenty characters: Levenshtein 95, Jaro-Winkler 99
    let result = match_names("ІВАНОВ ІВАН ІВАНОВИЧ", "ІВАНОВ ІВАН ІВАОВИЧ");
    assert_eq!(result.levenshtein_score, 95.0);
    assert_eq!(result.jaro_winkler_score, 99.0);
    assert_eq!(result.algorithm, Algorithm::JaroWinkler);
    assert_eq!(result.status, MatchStatus::Match);
}

#[test]
fn test_typos_in_two_components() {
    let result = match_names("ІВАНОВ ІВАН ІВАНОВИЧ", "ІВАНОВ ІВН ІВАОВЧ");
    assert_eq!(result.status, MatchStatus::CloseMatch);
    assert_eq!(result.score, 94.65);
    assert_eq!(result.levenshtein_score, 85.0);
}

#[test]
fn test_different_people() {
    let result = match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "КОВАЛЕНКО ПЕТРО МИКОЛАЙОВИЧ");
    assert_eq!(result.status, MatchStatus::NoMatch);
    assert_eq!(result.score, 66.59);
    assert!(result.score < 75.0);
}

#[test]
fn test_extra_patronymic_never_matches() {
    let result = match_names("КОВАЛЕНКО МАРІЯ", "КОВАЛЕНКО МАРІЯ ПЕТРІВНА");
    assert_eq!(result.status, MatchStatus::CloseMatch);
    assert_eq!(result.score, 92.5);
    assert_eq!(result.levenshtein_score, 62.5);
    assert_eq!(result.algorithm, Algorithm::JaroWinkler);
}

#[test]
fn test_transliteration_is_not_a_match() {
    let result = match_names("ПЕТРЕНКО ОЛЕНА ІВАНІВНА", "PETRANKO OLENA IVANIVNA");
    assert_eq!(result.status, MatchStatus::NoMatch);
}

#[test]
fn test_punctuation_and_case_ignored() {
    let result = match_names("O'Brien-Smith,  John", "obrien smith john");
    assert_eq!(result.status, MatchStatus::CloseMatch);
    assert_eq!(result.score, 94.44);

    let result = match_names("  шевченко тарас ", "ШЕВЧЕНКО-ТАРАС");
    assert_eq!(result.status, MatchStatus::Match);
    assert_eq!(result.score, 100.0);
}

#[test]
fn test_inverted_thresholds_rejected() {
    assert_eq!(
        Matcher::new(70.0, 80.0).unwrap_err(),
        ConfigError::ThresholdOrder {
            close_match: 80.0,
            matched: 70.0,
        }
    );
}

#[test]
fn test_threshold_bounds_inclusive() {
    // Jaro-Winkler for this pair is exactly 92.5
    let at_match = Matcher::new(92.5, 50.0).unwrap();
    assert_eq!(
        at_match
            .match_names("КОВАЛЕНКО МАРІЯ", "КОВАЛЕНКО МАРІЯ ПЕТРІВНА")
            .status,
        MatchStatus::Match
    );

    let at_close = Matcher::new(95.0, 92.5).unwrap();
    assert_eq!(
        at_close
            .match_names("КОВАЛЕНКО МАРІЯ", "КОВАЛЕНКО МАРІЯ ПЕТРІВНА")
            .status,
        MatchStatus::CloseMatch
    );

    // Initials scores are exact as well
    let matcher = Matcher::new(95.0, 50.0).unwrap();
    assert_eq!(
        matcher
            .match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "ШЕВЧЕНКО П. Г.")
            .status,
        MatchStatus::CloseMatch
    );
}

#[test]
fn test_result_json_shape() {
    let result = match_names("ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ", "ШЕВЧЕНКО Т.Г.");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": "MATCH",
            "score": 100.0,
            "algorithm": "initials",
            "levenshtein_score": 100.0,
            "jaro_winkler_score": 100.0,
        })
    );
}
