//! Time perspective classifier.

use std::sync::LazyLock;

use regex::Regex;

/// Australian/NZ phrasing: `timing: X;`.
static ANZCTR_TIMING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"timing: (.+?);").expect("valid timing regex"));

const TIMINGS: &[(&str, &str)] = &[
    ("cross-sectional", "cross-sectional"),
    ("longitudinal", "longitudinal"),
    ("other", "other"),
    ("prospective", "prospective"),
    ("retrospective", "retrospective"),
    ("both", "retrospective/prospective"),
    ("retrospective/prospective", "retrospective/prospective"),
];

/// Containment checks in priority order; the combined phrasing is tested
/// before either direction alone.
const CONTAINMENT: &[(&str, &str)] = &[
    ("prospective/retrospective", "prospective/retrospective"),
    ("retrospective", "retrospective"),
    ("prospective", "prospective"),
    ("longitudinal", "longitudinal"),
    ("cross-sectional", "cross-sectional"),
];

/// Classify the time perspective from free design text.
pub fn standardize_timing(design_text: &str) -> Option<String> {
    let lowered = design_text.to_lowercase();
    if let Some(captures) = ANZCTR_TIMING.captures(&lowered) {
        let token = captures[1].trim();
        return Some(lookup(token).map_or_else(|| token.to_string(), str::to_owned));
    }
    CONTAINMENT
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, value)| (*value).to_string())
}

fn lookup(key: &str) -> Option<&'static str> {
    TIMINGS
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::standardize_timing;

    #[test]
    fn anzctr_phrasing_extracts_and_normalizes() {
        assert_eq!(
            standardize_timing("Timing: Both; Masking: open").as_deref(),
            Some("retrospective/prospective")
        );
    }

    #[test]
    fn combined_phrasing_wins_over_either_direction() {
        assert_eq!(
            standardize_timing("prospective/retrospective chart review").as_deref(),
            Some("prospective/retrospective")
        );
    }

    #[test]
    fn single_direction_containment() {
        assert_eq!(
            standardize_timing("A retrospective cohort").as_deref(),
            Some("retrospective")
        );
        assert_eq!(
            standardize_timing("prospective enrollment").as_deref(),
            Some("prospective")
        );
    }

    #[test]
    fn silent_text_yields_absent() {
        assert_eq!(standardize_timing("open label, single arm"), None);
    }
}
