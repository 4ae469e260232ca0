//! Canonical trial document model.
//!
//! One document per feed row, shaped for the downstream search index. Every
//! nested block carries an `@type` tag identifying its schema role. Optional
//! information that is absent in the source stays absent in the output
//! (`skip_serializing_if`), never an empty placeholder.

use serde::{Deserialize, Serialize};

/// Allow-list of top-level document keys accepted by the downstream field
/// mapping. Serialized documents must stay within this set.
pub const CANONICAL_FIELDS: &[&str] = &[
    "@type",
    "_id",
    "identifier",
    "identifierSource",
    "url",
    "name",
    "alternateName",
    "abstract",
    "description",
    "funding",
    "author",
    "studyStatus",
    "studyEvent",
    "hasResults",
    "dateCreated",
    "datePublished",
    "dateModified",
    "curatedBy",
    "healthCondition",
    "keywords",
    "studyDesign",
    "outcome",
    "eligibilityCriteria",
    "isBasedOn",
    "relatedTo",
    "studyLocation",
    "armGroup",
    "interventions",
    "interventionText",
];

/// The normalized output record for one trial registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialDocument {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#abstract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<Vec<Funding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_status: Option<StudyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_event: Option<Vec<StudyEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated_by: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_condition: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_design: Option<StudyDesign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Vec<Outcome>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_criteria: Option<Vec<Eligibility>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_based_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_location: Option<Vec<Place>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_group: Option<Vec<ArmGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interventions: Option<Vec<Intervention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervention_text: Option<String>,
}

impl TrialDocument {
    /// Start a document for the given trial identifier. All optional fields
    /// begin absent.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            schema_type: "ClinicalTrial".to_string(),
            id: identifier.clone(),
            identifier,
            identifier_source: None,
            url: None,
            name: None,
            alternate_name: None,
            r#abstract: None,
            description: None,
            funding: None,
            author: None,
            study_status: None,
            study_event: None,
            has_results: None,
            date_created: None,
            date_published: None,
            date_modified: None,
            curated_by: None,
            health_condition: None,
            keywords: None,
            study_design: None,
            outcome: None,
            eligibility_criteria: None,
            is_based_on: None,
            related_to: None,
            study_location: None,
            arm_group: None,
            interventions: None,
            intervention_text: None,
        }
    }
}

/// Recruitment status plus aggregated enrollment target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStatus {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_type: Option<String>,
}

impl StudyStatus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "StudyStatus".to_string(),
            status: None,
            status_date: None,
            enrollment_count: None,
            enrollment_type: None,
        }
    }
}

impl Default for StudyStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// One dated occurrence in the trial lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyEvent {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub study_event_type: String,
    pub study_event_date: String,
    pub study_event_date_type: String,
}

impl StudyEvent {
    /// An event with an actual (not anticipated) date.
    #[must_use]
    pub fn actual(event_type: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            schema_type: "StudyEvent".to_string(),
            study_event_type: event_type.into(),
            study_event_date: date.into(),
            study_event_date_type: "actual".to_string(),
        }
    }
}

/// Inclusion/exclusion criteria and demographic limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_criteria: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_criteria: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Eligibility {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "Eligibility".to_string(),
            inclusion_criteria: None,
            exclusion_criteria: None,
            minimum_age: None,
            maximum_age: None,
            gender: None,
        }
    }

    /// True when no field beyond the type tag carries information.
    pub fn is_blank(&self) -> bool {
        self.inclusion_criteria.is_none()
            && self.exclusion_criteria.is_none()
            && self.minimum_age.is_none()
            && self.maximum_age.is_none()
            && self.gender.is_none()
    }
}

impl Default for Eligibility {
    fn default() -> Self {
        Self::new()
    }
}

/// A contact person, optionally affiliated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<Vec<Organization>>,
}

impl Person {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            schema_type: "Person".to_string(),
            name: name.into(),
            affiliation: None,
        }
    }

    #[must_use]
    pub fn with_affiliation(mut self, affiliation: Option<Organization>) -> Self {
        self.affiliation = affiliation.map(|org| vec![org]);
        self
    }
}

/// Sponsor, affiliation, or curation organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curation_date: Option<String>,
}

impl Organization {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            schema_type: "Organization".to_string(),
            name: name.into(),
            identifier: None,
            role: None,
            url: None,
            version_date: None,
            curation_date: None,
        }
    }
}

/// Funding entry wrapping its funder organizations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funding {
    pub funder: Vec<Organization>,
}

/// Normalized study design block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDesign {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_number: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_allocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_model: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_primary_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_design_text: Option<String>,
}

impl StudyDesign {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "StudyDesign".to_string(),
            study_type: None,
            phase: None,
            phase_number: None,
            design_allocation: None,
            design_model: None,
            design_primary_purpose: None,
            study_design_text: None,
        }
    }
}

impl Default for StudyDesign {
    fn default() -> Self {
        Self::new()
    }
}

/// One treatment/control branch with its embedded interventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmGroup {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervention: Option<Vec<Intervention>>,
}

impl ArmGroup {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "ArmGroup".to_string(),
            name: None,
            description: None,
            intervention: None,
        }
    }
}

impl Default for ArmGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// A treatment, drug, or procedure applied within an arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intervention {
    #[serde(rename = "@type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl Intervention {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_type: "Intervention".to_string(),
            name: None,
            description: None,
            identifier: None,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }
}

impl Default for Intervention {
    fn default() -> Self {
        Self::new()
    }
}

/// A primary outcome measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub outcome_measure: String,
    pub outcome_type: String,
}

impl Outcome {
    #[must_use]
    pub fn primary(measure: impl Into<String>) -> Self {
        Self {
            schema_type: "Outcome".to_string(),
            outcome_measure: measure.into(),
            outcome_type: "primary".to_string(),
        }
    }
}

/// A study location, standardized to a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub study_location_country: String,
}

impl Place {
    #[must_use]
    pub fn country(name: impl Into<String>) -> Self {
        Self {
            schema_type: "Place".to_string(),
            study_location_country: name.into(),
        }
    }
}
