//! Eligibility criteria extraction.
//!
//! Several registries fold exclusion criteria into the inclusion field after
//! a literal `Exclusion Criteria:` marker; others publish a separate field.
//! Both lists are initialized up front so neither branch depends on the
//! other having run.

use ictrp_model::{Eligibility, TrialRow, columns};

const EXCLUSION_MARKER: &str = "Exclusion Criteria:";
const INCLUSION_LABELS: &[&str] = &["Inclusion criteria:", "Inclusion Criteria:"];
const EXCLUSION_LABELS: &[&str] = &["Exclusion criteria:", "Exclusion Criteria:"];

fn strip_labels(text: &str, labels: &[&str]) -> String {
    let mut stripped = text.to_string();
    for label in labels {
        stripped = stripped.replace(label, "");
    }
    stripped.trim().to_string()
}

/// Build the eligibility block, or `None` when the row carries no
/// eligibility information at all.
pub fn extract_eligibility(row: &TrialRow) -> Option<Vec<Eligibility>> {
    let mut inclusion: Vec<String> = Vec::new();
    let mut exclusion: Vec<String> = Vec::new();

    if let Some(text) = row.get(columns::INCLUSION_CRITERIA) {
        let mut segments = text.splitn(2, EXCLUSION_MARKER);
        if let Some(first) = segments.next() {
            inclusion.push(strip_labels(first, INCLUSION_LABELS));
        }
        if let Some(rest) = segments.next() {
            exclusion.push(rest.trim().to_string());
        }
    }
    if let Some(text) = row.get(columns::EXCLUSION_CRITERIA) {
        exclusion.push(strip_labels(text, EXCLUSION_LABELS));
    }

    let mut eligibility = Eligibility::new();
    if !inclusion.is_empty() {
        eligibility.inclusion_criteria = Some(inclusion);
    }
    if !exclusion.is_empty() {
        eligibility.exclusion_criteria = Some(exclusion);
    }
    if let Some(value) = row.get(columns::INCLUSION_AGEMIN) {
        eligibility.minimum_age = Some(value.to_lowercase());
    }
    if let Some(value) = row.get(columns::INCLUSION_AGEMAX) {
        eligibility.maximum_age = Some(value.to_lowercase());
    }
    if let Some(value) = row.get(columns::INCLUSION_GENDER) {
        eligibility.gender = Some(value.to_lowercase());
    }

    if eligibility.is_blank() {
        None
    } else {
        Some(vec![eligibility])
    }
}
