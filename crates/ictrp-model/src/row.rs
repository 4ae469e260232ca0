//! Input row model for the WHO ICTRP feed.
//!
//! A row is a flat mapping from registry-defined column name to text. Any
//! column may be absent or blank; both read back as `None` so no field access
//! can fail on missing data.

use std::collections::HashMap;

/// Column names as they appear in the WHO feed CSV header.
///
/// The set is fixed by the feed; the spellings (including the misspelled
/// `Date enrollement`) are the feed's own.
pub mod columns {
    pub const TRIAL_ID: &str = "TrialID";
    pub const SOURCE_REGISTER: &str = "Source Register";
    pub const WEB_ADDRESS: &str = "web address";
    pub const SCIENTIFIC_TITLE: &str = "Scientific title";
    pub const ACRONYM: &str = "Acronym";
    pub const PUBLIC_TITLE: &str = "Public title";
    pub const PRIMARY_SPONSOR: &str = "Primary sponsor";
    pub const RESULTS_YES_NO: &str = "results yes no";
    pub const DATE_REGISTRATION: &str = "Date registration3";
    pub const LAST_REFRESHED_ON: &str = "Last Refreshed on";
    pub const EXPORT_DATE: &str = "Export date";
    pub const COUNTRIES: &str = "Countries";
    pub const CONDITION: &str = "Condition";
    pub const RECRUITMENT_STATUS: &str = "Recruitment Status";
    pub const TARGET_SIZE: &str = "Target size";
    pub const DATE_ENROLLEMENT: &str = "Date enrollement";
    pub const RESULTS_DATE_COMPLETED: &str = "results date completed";
    pub const RESULTS_DATE_POSTED: &str = "results date posted";
    pub const INCLUSION_CRITERIA: &str = "Inclusion Criteria";
    pub const EXCLUSION_CRITERIA: &str = "Exclusion Criteria";
    pub const INCLUSION_AGEMIN: &str = "Inclusion agemin";
    pub const INCLUSION_AGEMAX: &str = "Inclusion agemax";
    pub const INCLUSION_GENDER: &str = "Inclusion gender";
    pub const CONTACT_FIRSTNAME: &str = "Contact Firstname";
    pub const CONTACT_LASTNAME: &str = "Contact Lastname";
    pub const CONTACT_AFFILIATION: &str = "Contact Affiliation";
    pub const STUDY_TYPE: &str = "Study type";
    pub const STUDY_DESIGN: &str = "Study design";
    pub const PHASE: &str = "Phase";
    pub const INTERVENTION: &str = "Intervention";
    pub const PRIMARY_OUTCOME: &str = "Primary outcome";
}

/// One feed row: column name to raw text.
#[derive(Debug, Clone, Default)]
pub struct TrialRow {
    values: HashMap<String, String>,
}

impl TrialRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for tests and hand-built rows.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Read a column. Absent columns and blank values are both `None`.
    pub fn get(&self, column: &str) -> Option<&str> {
        let value = self.values.get(column)?.trim();
        if value.is_empty() { None } else { Some(value) }
    }

    pub fn trial_id(&self) -> Option<&str> {
        self.get(columns::TRIAL_ID)
    }

    pub fn source_register(&self) -> Option<&str> {
        self.get(columns::SOURCE_REGISTER)
    }
}
