//! Study design normalization.
//!
//! Five classifiers run over the same free-text design/type fields. The ~15
//! source registries encode the same concepts in mutually incompatible
//! phrasings, so each classifier is a priority-ordered cascade: registry-
//! specific extraction steps first, a direct lookup of the whole text after,
//! then the documented fallback. All matching happens on lowercased text.

mod allocation;
mod model;
mod phase;
mod purpose;
mod study_type;
mod timing;

pub use allocation::standardize_allocation;
pub use model::standardize_model;
pub use phase::{phase_numbers, standardize_phase};
pub use purpose::standardize_purpose;
pub use study_type::standardize_study_type;
pub use timing::standardize_timing;

use ictrp_model::{StudyDesign, TrialRow, columns};

/// Assemble the design block for one row, or `None` when the row carries no
/// design information.
pub fn extract_design(row: &TrialRow) -> Option<StudyDesign> {
    let mut design = StudyDesign::new();
    design.study_type = row.get(columns::STUDY_TYPE).map(standardize_study_type);
    if let Some(labels) = row.get(columns::PHASE).and_then(standardize_phase) {
        design.phase_number = phase_numbers(&labels);
        design.phase = Some(labels);
    }
    if let Some(text) = row.get(columns::STUDY_DESIGN) {
        design.design_allocation = standardize_allocation(text);
        let mut models = Vec::new();
        if let Some(model) = standardize_model(text) {
            models.push(model);
        }
        if let Some(timing) = standardize_timing(text) {
            models.push(timing);
        }
        if !models.is_empty() {
            design.design_model = Some(models);
        }
        design.design_primary_purpose =
            standardize_purpose(text, row.get(columns::STUDY_TYPE));
        design.study_design_text = Some(text.to_string());
    }
    if is_blank(&design) { None } else { Some(design) }
}

fn is_blank(design: &StudyDesign) -> bool {
    design.study_type.is_none()
        && design.phase.is_none()
        && design.phase_number.is_none()
        && design.design_allocation.is_none()
        && design.design_model.is_none()
        && design.design_primary_purpose.is_none()
        && design.study_design_text.is_none()
}
