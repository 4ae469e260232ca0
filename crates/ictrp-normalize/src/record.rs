//! Row-level orchestration and batch assembly.
//!
//! One row in, one canonical document out. Field-level failures degrade to
//! absent fields plus a diagnostic; nothing here aborts a row or a run. The
//! duplicate-identifier check runs after the full batch is transformed and
//! reports duplicates without dropping them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{error, warn};

use ictrp_model::{
    CountryTable, Funding, Organization, TrialDocument, TrialRow, columns,
};

use crate::datetime::{DateFormat, ISO_DATE, format_date};
use crate::{arms, authors, condition, country, design, eligibility, events, outcome, status, vocab};

const CURATOR_NAME: &str = "WHO International Clinical Trials Registry Platform";
const CURATOR_IDENTIFIER: &str = "ICTRP";
const CURATOR_URL: &str = "https://www.who.int/ictrp/en/";

/// Result of normalizing one feed snapshot.
#[derive(Debug)]
pub struct Batch {
    pub documents: Vec<TrialDocument>,
    pub duplicates: Vec<DuplicateId>,
    /// Rows skipped because they came from the excluded register.
    pub excluded: usize,
}

/// One identifier that appeared on more than one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub identifier: String,
    pub occurrences: usize,
}

/// Interpret a yes/no flag column.
pub fn binarize(value: &str) -> Option<bool> {
    match value.trim() {
        "yes" | "Yes" | "1" => Some(true),
        "no" | "No" | "0" => Some(false),
        _ => None,
    }
}

/// Normalize one row into its canonical document.
pub fn normalize_row(
    row: &TrialRow,
    countries: &CountryTable,
    curation_date: NaiveDate,
) -> TrialDocument {
    let identifier = row.trial_id().unwrap_or_else(|| {
        warn!("row without a trial identifier");
        ""
    });
    let mut doc = TrialDocument::new(identifier);

    doc.identifier_source = row
        .source_register()
        .map(|code| vocab::registry_full_name(code).to_string());
    doc.url = row.get(columns::WEB_ADDRESS).map(str::to_owned);
    doc.name = row.get(columns::SCIENTIFIC_TITLE).map(str::to_owned);
    let alternates: Vec<String> = [columns::ACRONYM, columns::PUBLIC_TITLE]
        .iter()
        .filter_map(|column| row.get(column))
        .map(str::to_owned)
        .collect();
    if !alternates.is_empty() {
        doc.alternate_name = Some(alternates);
    }
    if let Some(sponsor) = row.get(columns::PRIMARY_SPONSOR) {
        let mut funder = Organization::named(sponsor);
        funder.role = Some("lead sponsor".to_string());
        doc.funding = Some(vec![Funding {
            funder: vec![funder],
        }]);
    }
    doc.has_results = row.get(columns::RESULTS_YES_NO).and_then(binarize);

    doc.date_created = normalized_date(row, columns::DATE_REGISTRATION, DateFormat::CompactYmd);
    let modified = normalized_date(row, columns::LAST_REFRESHED_ON, DateFormat::DayMonthYear);
    // The status block carries the modification date even when normalization
    // failed; the raw value is better than nothing there.
    let status_date = modified
        .clone()
        .or_else(|| row.get(columns::LAST_REFRESHED_ON).map(str::to_owned));
    doc.date_modified = modified;
    doc.curated_by = Some(curated_by(row, curation_date));

    doc.study_location = row
        .get(columns::COUNTRIES)
        .and_then(|raw| country::split_countries(raw, countries));
    doc.health_condition = row
        .get(columns::CONDITION)
        .and_then(condition::split_conditions);
    doc.study_status = Some(status::extract_status(row, status_date.as_deref()));
    doc.study_event = events::extract_events(row);
    doc.eligibility_criteria = eligibility::extract_eligibility(row);
    doc.author = authors::extract_authors(row);
    doc.study_design = design::extract_design(row);
    let extraction = arms::extract_arms(row);
    doc.arm_group = extraction.arm_groups;
    doc.interventions = extraction.interventions;
    doc.intervention_text = row.get(columns::INTERVENTION).map(str::to_owned);
    doc.outcome = row
        .get(columns::PRIMARY_OUTCOME)
        .and_then(outcome::extract_outcomes);

    doc
}

/// Normalize a full feed snapshot: exclusion filter, row map, duplicate scan.
pub fn normalize_batch(
    rows: &[TrialRow],
    countries: &CountryTable,
    curation_date: NaiveDate,
) -> Batch {
    let mut documents = Vec::with_capacity(rows.len());
    let mut excluded = 0usize;
    for row in rows {
        if row.source_register().is_some_and(vocab::is_excluded_register) {
            excluded += 1;
            continue;
        }
        documents.push(normalize_row(row, countries, curation_date));
    }
    let duplicates = find_duplicates(&documents);
    for duplicate in &duplicates {
        error!(
            identifier = %duplicate.identifier,
            occurrences = duplicate.occurrences,
            "duplicate trial identifier in batch"
        );
    }
    Batch {
        documents,
        duplicates,
        excluded,
    }
}

fn find_duplicates(documents: &[TrialDocument]) -> Vec<DuplicateId> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for document in documents {
        *counts.entry(document.identifier.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(identifier, occurrences)| DuplicateId {
            identifier: identifier.to_string(),
            occurrences,
        })
        .collect()
}

fn normalized_date(row: &TrialRow, column: &str, format: DateFormat) -> Option<String> {
    let raw = row.get(column)?;
    match format_date(raw, format) {
        Ok(date) => Some(date),
        Err(error) => {
            warn!(
                trial = row.trial_id().unwrap_or("?"),
                column,
                %error,
                "unparseable source date"
            );
            None
        }
    }
}

fn curated_by(row: &TrialRow, curation_date: NaiveDate) -> Organization {
    let mut curator = Organization::named(CURATOR_NAME);
    curator.identifier = Some(CURATOR_IDENTIFIER.to_string());
    curator.url = Some(CURATOR_URL.to_string());
    curator.version_date = normalized_date(row, columns::EXPORT_DATE, DateFormat::ExportStamp);
    curator.curation_date = Some(curation_date.format(ISO_DATE).to_string());
    curator
}
