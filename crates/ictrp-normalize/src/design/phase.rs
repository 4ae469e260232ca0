//! Phase classifier.
//!
//! Produces one or more canonical phase labels plus a parallel numeric list
//! derived from the labels (not from raw text). The EU-CTR long form lists
//! every phase as a `human pharmacology (phase N): yes/no` line and needs a
//! per-line scan instead of a single lookup.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthesized phase token in EU-CTR design lines, e.g. `(Phase II)`.
static EU_PHASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(phase ([a-z0-9]+)\)").expect("valid EU phase regex"));

/// Textual and numeric phase designators seen across registries.
const PHASES: &[(&str, &[&str])] = &[
    ("n/a", &["not applicable"]),
    ("retrospective", &["not applicable"]),
    ("retrospective study", &["not applicable"]),
    ("0", &["phase 0"]),
    ("1", &["phase 1"]),
    ("2", &["phase 2"]),
    ("3", &["phase 3"]),
    ("4", &["phase 4"]),
    ("i", &["phase 1"]),
    ("ii", &["phase 2"]),
    ("iii", &["phase 3"]),
    ("iv", &["phase 4"]),
    ("phase i", &["phase 1"]),
    ("phase ii", &["phase 2"]),
    ("phase iii", &["phase 3"]),
    ("phase iv", &["phase 4"]),
    ("phase-1", &["phase 1"]),
    ("phase-2", &["phase 2"]),
    ("phase-3", &["phase 3"]),
    ("phase-4", &["phase 4"]),
    ("phase 1/phase 2", &["phase 1", "phase 2"]),
    ("phase 1 / phase 2", &["phase 1", "phase 2"]),
    ("1-2", &["phase 1", "phase 2"]),
    ("phase i/ii", &["phase 1", "phase 2"]),
    ("phase 2/phase 3", &["phase 2", "phase 3"]),
    ("phase 2 / phase 3", &["phase 2", "phase 3"]),
    ("phase ii/iii", &["phase 2", "phase 3"]),
    ("ii-iii", &["phase 2", "phase 3"]),
    ("2-3", &["phase 2", "phase 3"]),
];

/// Canonical phase labels for a raw phase designator.
///
/// `not selected` means the registry recorded nothing; anything else that
/// misses the table passes through lowercased as a single label.
pub fn standardize_phase(raw: &str) -> Option<Vec<String>> {
    let lowered = raw.trim().to_lowercase();
    if lowered.contains("human pharmacology") {
        return eu_ctr_phases(raw);
    }
    if lowered == "not selected" {
        return None;
    }
    match lookup(&lowered) {
        Some(labels) => Some(labels.iter().map(|label| (*label).to_string()).collect()),
        None => Some(vec![lowered]),
    }
}

/// Scan the EU-CTR multi-line block for phases marked `yes`.
fn eu_ctr_phases(raw: &str) -> Option<Vec<String>> {
    let labels: Vec<String> = raw
        .lines()
        .filter(|line| line.to_lowercase().contains("yes"))
        .filter_map(|line| {
            let lowered = line.to_lowercase();
            EU_PHASE
                .captures(&lowered)
                .map(|captures| captures[1].to_string())
        })
        .flat_map(|token| match lookup(&token) {
            Some(labels) => labels
                .iter()
                .map(|label| (*label).to_string())
                .collect::<Vec<_>>(),
            None => vec![token],
        })
        .collect();
    if labels.is_empty() { None } else { Some(labels) }
}

fn lookup(key: &str) -> Option<&'static [&'static str]> {
    PHASES
        .iter()
        .find(|(designator, _)| *designator == key)
        .map(|(_, labels)| *labels)
}

/// Numeric phase values for a list of canonical labels. Labels without a
/// numeric mapping (e.g. `not applicable`) contribute nothing; an entirely
/// non-numeric list yields `None`.
pub fn phase_numbers(labels: &[String]) -> Option<Vec<u8>> {
    let numbers: Vec<u8> = labels
        .iter()
        .flat_map(|label| phase_number(label).iter().copied())
        .collect();
    if numbers.is_empty() { None } else { Some(numbers) }
}

fn phase_number(label: &str) -> &'static [u8] {
    match label {
        "early phase 1" => &[0, 1],
        "phase 0" => &[0],
        "phase 1" => &[1],
        "phase 2" => &[2],
        "phase 3" => &[3],
        "phase 4" => &[4],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_designator_yields_both_phases() {
        let labels = standardize_phase("Phase 1/Phase 2").unwrap();
        assert_eq!(labels, vec!["phase 1", "phase 2"]);
        assert_eq!(phase_numbers(&labels), Some(vec![1, 2]));
    }

    #[test]
    fn not_applicable_has_no_numeric_phase() {
        let labels = standardize_phase("N/A").unwrap();
        assert_eq!(labels, vec!["not applicable"]);
        assert_eq!(phase_numbers(&labels), None);
    }

    #[test]
    fn not_selected_means_no_phase() {
        assert_eq!(standardize_phase("Not selected"), None);
    }

    #[test]
    fn eu_ctr_block_scans_lines_marked_yes() {
        let block = "Human pharmacology (Phase I): no\n\
                     Therapeutic exploratory (Phase II): yes\n\
                     Therapeutic confirmatory (Phase III): yes\n\
                     Therapeutic use (Phase IV): no";
        let labels = standardize_phase(block).unwrap();
        assert_eq!(labels, vec!["phase 2", "phase 3"]);
        assert_eq!(phase_numbers(&labels), Some(vec![2, 3]));
    }

    #[test]
    fn early_phase_one_spans_zero_and_one() {
        assert_eq!(
            phase_numbers(&["early phase 1".to_string()]),
            Some(vec![0, 1])
        );
    }

    #[test]
    fn unknown_designator_passes_through() {
        assert_eq!(
            standardize_phase("Phase 12b").unwrap(),
            vec!["phase 12b".to_string()]
        );
    }
}
