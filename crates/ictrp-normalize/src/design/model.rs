//! Design model classifier (assignment strategy).
//!
//! Five registry-specific extraction steps tried in order, each normalizing
//! its extracted token through the model vocabulary (a token that misses the
//! vocabulary is kept as-is), then a direct lookup of the whole text. A
//! total miss yields no model.

use std::sync::LazyLock;

use regex::Regex;

/// Iranian registry phrasing: `assignment: X,`.
static IRCT_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"assignment: (.+?),").expect("valid IRCT assignment regex"));

/// German registry phrasing: `assignment: X.`.
static DRKS_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"assignment: (.+?)\.").expect("valid DRKS assignment regex"));

/// Australian/NZ and Lebanese registry phrasing: `assignment: X;`.
static ANZCTR_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"assignment: (.+?);").expect("valid ANZCTR assignment regex"));

/// Interventional and observational model vocabulary
/// (ClinicalTrials.gov `DesignInterventionModel`/`DesignObservationalModel`
/// field values).
const MODELS: &[(&str, &str)] = &[
    ("cross-over", "crossover assignment"),
    ("crossover", "crossover assignment"),
    ("cross over", "crossover assignment"),
    ("factorial", "factorial assignment"),
    ("parallel", "parallel assignment"),
    ("sequential", "sequential assignment"),
    ("single group", "single group assignment"),
    ("single arm", "single group assignment"),
    ("single arm study", "single group assignment"),
    ("case control", "case control"),
    ("case-control", "case-control"),
    ("case-control study", "case-control"),
    ("case-crossover", "case-crossover"),
    ("case-only", "case-only"),
    ("case study", "case-only"),
    ("cohort", "cohort"),
    ("cohort study", "cohort"),
    ("defined population", "defined population"),
    ("ecologic or community", "ecologic or community"),
    ("family-based", "family-based"),
    ("natural history", "natural history"),
    ("other", "other"),
];

/// The ordered extraction cascade; every step is a pure function over the
/// lowercased design text.
const CASCADE: &[fn(&str) -> Option<String>] = &[
    irct_assignment,
    drks_assignment,
    anzctr_assignment,
    euctr_literal,
    jprn_literal,
    whole_text_lookup,
];

/// Classify the design model from free design text.
pub fn standardize_model(design_text: &str) -> Option<String> {
    let lowered = design_text.to_lowercase();
    CASCADE.iter().find_map(|step| step(&lowered))
}

fn irct_assignment(text: &str) -> Option<String> {
    let captures = IRCT_ASSIGNMENT.captures(text)?;
    Some(normalize_token(captures[1].trim()))
}

fn drks_assignment(text: &str) -> Option<String> {
    let captures = DRKS_ASSIGNMENT.captures(text)?;
    Some(normalize_token(captures[1].trim()))
}

fn anzctr_assignment(text: &str) -> Option<String> {
    let captures = ANZCTR_ASSIGNMENT.captures(text)?;
    Some(normalize_token(captures[1].trim()))
}

fn euctr_literal(text: &str) -> Option<String> {
    if text.contains("parallel group: yes") {
        return Some("parallel assignment".to_string());
    }
    if text.contains("cross over group: yes") {
        return Some("crossover assignment".to_string());
    }
    None
}

fn jprn_literal(text: &str) -> Option<String> {
    if text.contains("parallel assignment") {
        return Some("parallel assignment".to_string());
    }
    if text.contains("single assignment") {
        return Some("single group assignment".to_string());
    }
    None
}

fn whole_text_lookup(text: &str) -> Option<String> {
    lookup(text.trim()).map(str::to_owned)
}

fn normalize_token(token: &str) -> String {
    lookup(token).map_or_else(|| token.to_string(), str::to_owned)
}

fn lookup(key: &str) -> Option<&'static str> {
    MODELS
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::standardize_model;

    #[test]
    fn irct_comma_phrasing() {
        assert_eq!(
            standardize_model("Assignment: Parallel, other design features: none").as_deref(),
            Some("parallel assignment")
        );
    }

    #[test]
    fn drks_period_phrasing() {
        assert_eq!(
            standardize_model("Assignment: Single arm study. Open label.").as_deref(),
            Some("single group assignment")
        );
    }

    #[test]
    fn anzctr_semicolon_phrasing() {
        assert_eq!(
            standardize_model("Intervention model: Assignment: Crossover; Masking: open").as_deref(),
            Some("crossover assignment")
        );
    }

    #[test]
    fn eu_and_japanese_literals() {
        assert_eq!(
            standardize_model("Controlled: yes Parallel group: yes").as_deref(),
            Some("parallel assignment")
        );
        assert_eq!(
            standardize_model("single assignment open label").as_deref(),
            Some("single group assignment")
        );
    }

    #[test]
    fn whole_text_lookup_as_last_resort() {
        assert_eq!(standardize_model("Cohort study").as_deref(), Some("cohort"));
    }

    #[test]
    fn unmatched_text_yields_no_model() {
        assert_eq!(standardize_model("open label pragmatic trial"), None);
    }

    #[test]
    fn unmapped_token_is_kept() {
        assert_eq!(
            standardize_model("Assignment: Adaptive, blinded").as_deref(),
            Some("adaptive")
        );
    }
}
