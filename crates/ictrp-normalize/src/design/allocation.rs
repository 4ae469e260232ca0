//! Allocation classifier (randomized vs non-randomized).

/// Ordered substring checks. Every non-randomized phrasing is tested before
/// the bare `randomised`/`randomized` checks, since several of them contain
/// that substring.
const ALLOCATION_RULES: &[(&str, &str)] = &[
    ("allocation: single arm study", "non-randomized"),
    ("randomized: no", "non-randomized"),
    ("randomised: no", "non-randomized"),
    ("not randomized", "non-randomized"),
    ("non randomized", "non-randomized"),
    ("non-randomized", "non-randomized"),
    ("not randomised", "non-randomized"),
    ("non randomised", "non-randomized"),
    ("non-randomised", "non-randomized"),
    ("randomised", "randomized"),
    ("randomized", "randomized"),
];

/// Classify the allocation from free design text; no match means absent.
pub fn standardize_allocation(design_text: &str) -> Option<String> {
    let lowered = design_text.to_lowercase();
    ALLOCATION_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, value)| (*value).to_string())
}
