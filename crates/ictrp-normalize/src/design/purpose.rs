//! Primary purpose classifier.

use std::sync::LazyLock;

use regex::Regex;

/// Australian/NZ and German phrasing: `purpose: X;`.
static PURPOSE_SEMICOLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"purpose: (.+?);").expect("valid purpose regex"));

/// Iranian phrasing: `purpose: X,`.
static PURPOSE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"purpose: (.+?),").expect("valid purpose regex"));

const PURPOSES: &[(&str, &str)] = &[
    ("treatment", "treatment"),
    ("treatment.", "treatment"),
    ("prevention", "prevention"),
    ("diagnostic", "diagnostic"),
    ("diagnostic test for accuracy", "diagnostic"),
    ("supportive", "supportive care"),
    ("supportive care", "supportive care"),
    ("screening", "screening"),
    ("health services research", "health services research"),
    ("health services reaserch", "health services research"),
    ("health care system", "health services research"),
    ("basic science", "basic science"),
    ("basic science/physiological study", "basic science"),
    ("other", "other"),
];

/// Classify the primary purpose from the design text, falling back to the
/// row's `Study type` field when the design text itself says nothing.
pub fn standardize_purpose(design_text: &str, study_type: Option<&str>) -> Option<String> {
    let lowered = design_text.to_lowercase();
    if let Some(captures) = PURPOSE_SEMICOLON.captures(&lowered) {
        let token = captures[1].trim();
        return Some(lookup(token).map_or_else(|| token.to_string(), str::to_owned));
    }
    if let Some(captures) = PURPOSE_COMMA.captures(&lowered) {
        let token = captures[1].trim();
        return Some(lookup(token).map_or_else(|| token.to_string(), str::to_owned));
    }
    if let Some(canonical) = lookup(lowered.trim()) {
        return Some(canonical.to_string());
    }
    study_type
        .and_then(|value| lookup(&value.trim().to_lowercase()))
        .map(str::to_owned)
}

fn lookup(key: &str) -> Option<&'static str> {
    PURPOSES
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, canonical)| *canonical)
}
