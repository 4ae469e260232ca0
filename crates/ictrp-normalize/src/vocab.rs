//! Registry vocabulary.
//!
//! Maps the short registry codes used in the feed's `Source Register` column
//! to full registry names, and recognizes the registries whose intervention
//! text has a parseable structure. Codes are matched case-insensitively to
//! absorb inconsistent data entry.

/// The one feed source that is not part of the WHO-aggregated reconciliation;
/// its rows are excluded before normalization.
pub const EXCLUDED_REGISTER: &str = "ClinicalTrials.gov";

/// Primary registries feeding the WHO aggregation.
const REGISTRY_NAMES: &[(&str, &str)] = &[
    ("ANZCTR", "Australian New Zealand Clinical Trials Registry"),
    ("REBEC", "Brazilian Clinical Trials Registry"),
    ("CHICTR", "Chinese Clinical Trial Register"),
    ("CRIS", "Clinical Research Information Service, Republic of Korea"),
    ("CTRI", "Clinical Trials Registry - India"),
    ("NCT", "ClinicalTrials.gov"),
    ("RPCEC", "Cuban Public Registry of Clinical Trials"),
    ("EU-CTR", "EU Clinical Trials Register"),
    ("DRKS", "German Clinical Trials Register"),
    ("IRCT", "Iranian Registry of Clinical Trials"),
    ("JPRN", "Japan Primary Registries Network"),
    ("PACTR", "Pan African Clinical Trial Registry"),
    ("REPEC", "Peruvian Clinical Trials Registry"),
    ("SLCTR", "Sri Lanka Clinical Trials Registry"),
    ("TCTR", "Thai Clinical Trials Register"),
    ("LBCTR", "Lebanon Clinical Trials Registry"),
    ("NTR", "Netherlands Trial Register"),
];

/// The known registry codes with their full names.
pub fn known_registries() -> &'static [(&'static str, &'static str)] {
    REGISTRY_NAMES
}

/// Full registry name for a short code; unknown codes pass through unchanged.
pub fn registry_full_name(code: &str) -> &str {
    let trimmed = code.trim();
    REGISTRY_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(trimmed))
        .map_or(code, |(_, name)| *name)
}

/// True when the row comes from the excluded ClinicalTrials.gov feed.
pub fn is_excluded_register(source: &str) -> bool {
    source.trim() == EXCLUDED_REGISTER
}

/// Registries whose intervention text can be split into arms/interventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmSource {
    Chictr,
    Pactr,
    Drks,
    Irct,
    Euctr,
}

/// Recognize an arm-parseable registry from the `Source Register` value.
///
/// The column holds short codes for most rows but full registry names for
/// some, so both spellings are accepted.
pub fn recognize_arm_source(source: &str) -> Option<ArmSource> {
    match source.trim().to_uppercase().as_str() {
        "CHICTR" | "CHINESE CLINICAL TRIAL REGISTER" => Some(ArmSource::Chictr),
        "PACTR" | "PAN AFRICAN CLINICAL TRIAL REGISTRY" => Some(ArmSource::Pactr),
        "DRKS" | "GERMAN CLINICAL TRIALS REGISTER" => Some(ArmSource::Drks),
        "IRCT" | "IRANIAN REGISTRY OF CLINICAL TRIALS" => Some(ArmSource::Irct),
        "EU-CTR" | "EU CLINICAL TRIALS REGISTER" => Some(ArmSource::Euctr),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_lookup_is_case_insensitive() {
        assert_eq!(
            registry_full_name("chictr"),
            "Chinese Clinical Trial Register"
        );
        assert_eq!(registry_full_name("Irct"), "Iranian Registry of Clinical Trials");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(registry_full_name("XYZCTR"), "XYZCTR");
    }

    #[test]
    fn arm_source_accepts_code_or_full_name() {
        assert_eq!(recognize_arm_source("DRKS"), Some(ArmSource::Drks));
        assert_eq!(
            recognize_arm_source("German Clinical Trials Register"),
            Some(ArmSource::Drks)
        );
        assert_eq!(recognize_arm_source("ANZCTR"), None);
    }
}
