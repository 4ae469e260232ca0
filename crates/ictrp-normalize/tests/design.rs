//! Design block assembly tests. The per-classifier cascades are covered by
//! unit tests next to each classifier; these exercise the composed block.

use ictrp_model::{TrialRow, columns};
use ictrp_normalize::design::extract_design;

#[test]
fn anzctr_design_text_fills_every_classifier() {
    let row = TrialRow::new().with(columns::STUDY_TYPE, "Interventional").with(
        columns::STUDY_DESIGN,
        "Allocation: Randomised controlled trial; Assignment: Parallel; \
         Purpose: Treatment; Timing: Prospective; Masking: Open",
    );
    let design = extract_design(&row).unwrap();
    assert_eq!(design.study_type.as_deref(), Some("interventional"));
    assert_eq!(design.design_allocation.as_deref(), Some("randomized"));
    // Model and time perspective land in the same list, model first.
    assert_eq!(
        design.design_model.as_deref(),
        Some(&["parallel assignment".to_string(), "prospective".to_string()][..])
    );
    assert_eq!(design.design_primary_purpose.as_deref(), Some("treatment"));
    assert!(
        design
            .study_design_text
            .as_deref()
            .unwrap()
            .starts_with("Allocation: Randomised")
    );
}

#[test]
fn phase_labels_and_numbers_travel_together() {
    let row = TrialRow::new().with(columns::PHASE, "Phase 1/Phase 2");
    let design = extract_design(&row).unwrap();
    assert_eq!(
        design.phase.as_deref(),
        Some(&["phase 1".to_string(), "phase 2".to_string()][..])
    );
    assert_eq!(design.phase_number.as_deref(), Some(&[1, 2][..]));
}

#[test]
fn not_applicable_phase_has_no_numbers() {
    let row = TrialRow::new().with(columns::PHASE, "N/A");
    let design = extract_design(&row).unwrap();
    assert_eq!(
        design.phase.as_deref(),
        Some(&["not applicable".to_string()][..])
    );
    assert_eq!(design.phase_number, None);
}

#[test]
fn unmatched_design_text_keeps_raw_text_only() {
    let row = TrialRow::new().with(columns::STUDY_DESIGN, "single centre pilot");
    let design = extract_design(&row).unwrap();
    assert_eq!(design.design_allocation, None);
    assert_eq!(design.design_model, None);
    assert_eq!(design.design_primary_purpose, None);
    assert_eq!(design.study_design_text.as_deref(), Some("single centre pilot"));
}

#[test]
fn row_without_design_information_yields_absent() {
    assert!(extract_design(&TrialRow::new()).is_none());
}

#[test]
fn purpose_falls_back_to_study_type_field() {
    let row = TrialRow::new()
        .with(columns::STUDY_TYPE, "Prevention")
        .with(columns::STUDY_DESIGN, "open label pragmatic");
    let design = extract_design(&row).unwrap();
    assert_eq!(design.design_primary_purpose.as_deref(), Some("prevention"));
}
