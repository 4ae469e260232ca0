//! Study event extraction.

use ictrp_model::{StudyEvent, TrialRow, columns};

/// Up to three dated occurrences, each present only when its source field is
/// non-empty. Dates are carried as published by the source registry.
pub fn extract_events(row: &TrialRow) -> Option<Vec<StudyEvent>> {
    let mut events = Vec::new();
    if let Some(date) = row.get(columns::DATE_ENROLLEMENT) {
        events.push(StudyEvent::actual("start", date));
    }
    if let Some(date) = row.get(columns::RESULTS_DATE_COMPLETED) {
        events.push(StudyEvent::actual("first submission of results", date));
    }
    if let Some(date) = row.get(columns::RESULTS_DATE_POSTED) {
        events.push(StudyEvent::actual("first posting of results", date));
    }
    if events.is_empty() { None } else { Some(events) }
}
