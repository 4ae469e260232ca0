//! Study type classifier.

/// Registry phrasings for the study-type enumeration. The misspellings are
/// real values observed in the feed.
const STUDY_TYPES: &[(&str, &str)] = &[
    ("intervention", "interventional"),
    ("treatment study", "interventional"),
    ("interventional study", "interventional"),
    (
        "interventional clinical trial of medicinal product",
        "interventional",
    ),
    ("prevention", "prevention"),
    ("observational study", "observational"),
    ("epidemilogical research", "observational"),
    ("prognosis study", "observational"),
    ("diagnostic test", "diagnostic test"),
    ("screening", "screening"),
    ("basic science", "basic science"),
    ("health services research", "health services research"),
    ("health services reaserch", "health services research"),
    ("others,meta-analysis etc", "others"),
];

/// Canonical study type; unknown input passes through lowercased.
pub fn standardize_study_type(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    lookup(&lowered).map_or(lowered, str::to_owned)
}

fn lookup(key: &str) -> Option<&'static str> {
    STUDY_TYPES
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::standardize_study_type;

    #[test]
    fn known_phrasings_map_to_the_enumeration() {
        assert_eq!(standardize_study_type("Treatment study"), "interventional");
        assert_eq!(
            standardize_study_type("Epidemilogical research"),
            "observational"
        );
        assert_eq!(standardize_study_type("Others,meta-analysis etc"), "others");
    }

    #[test]
    fn unknown_input_passes_through_lowercased() {
        assert_eq!(standardize_study_type("Expanded Access"), "expanded access");
    }
}
