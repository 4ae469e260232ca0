pub mod country;
pub mod document;
pub mod row;

pub use country::{CountryRecord, CountryTable};
pub use document::{
    ArmGroup, CANONICAL_FIELDS, Eligibility, Funding, Intervention, Organization, Outcome,
    Person, Place, StudyDesign, StudyEvent, StudyStatus, TrialDocument,
};
pub use row::{TrialRow, columns};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_get_treats_blank_as_missing() {
        let row = TrialRow::new()
            .with(columns::TRIAL_ID, "ChiCTR2000029953")
            .with(columns::RECRUITMENT_STATUS, "   ");
        assert_eq!(row.get(columns::TRIAL_ID), Some("ChiCTR2000029953"));
        assert_eq!(row.get(columns::RECRUITMENT_STATUS), None);
        assert_eq!(row.get(columns::PHASE), None);
    }

    #[test]
    fn country_lookup_is_case_insensitive() {
        let mut table = CountryTable::new();
        table.insert(
            "france",
            CountryRecord {
                name: "France".to_string(),
                iso3: "FRA".to_string(),
            },
        );
        assert_eq!(table.lookup(" France ").map(|r| r.name.as_str()), Some("France"));
        assert!(table.lookup("atlantis").is_none());
    }
}
