//! Recruitment status and enrollment target aggregation.

use ictrp_model::{StudyStatus, TrialRow, columns};

/// Build the status block. `status_date` is the row's (normalized when
/// possible) modification date.
pub fn extract_status(row: &TrialRow, status_date: Option<&str>) -> StudyStatus {
    let mut status = StudyStatus::new();
    if let Some(value) = row.get(columns::RECRUITMENT_STATUS) {
        status.status = Some(value.to_lowercase());
    }
    status.status_date = status_date.map(str::to_owned);
    if let Some(target) = row.get(columns::TARGET_SIZE) {
        let total = aggregate_target_size(target);
        if total > 0 {
            status.enrollment_count = Some(total as u64);
            status.enrollment_type = Some("anticipated".to_string());
        }
    }
    status
}

/// Sum the per-arm targets in a `Target size` value.
///
/// Arms are semicolon-delimited; each entry is `label: count` or a bare
/// count. Entries that do not parse as integers are skipped.
pub fn aggregate_target_size(raw: &str) -> i64 {
    raw.split(';')
        .filter_map(|entry| {
            let parts: Vec<&str> = entry.split(':').collect();
            let candidate = if parts.len() == 2 { parts[1] } else { parts[0] };
            candidate.trim().parse::<i64>().ok()
        })
        .sum()
}
