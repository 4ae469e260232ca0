//! Arm and intervention extraction.
//!
//! Only a handful of registries publish their intervention text in a
//! parseable form; the splitter is chosen by registry. Everything else
//! yields no arms and no interventions, leaving the raw text available in
//! `interventionText`.

use std::sync::LazyLock;

use regex::Regex;

use ictrp_model::{ArmGroup, Intervention, TrialRow, columns};

use crate::vocab::{ArmSource, recognize_arm_source};

/// Repeating DRKS/IRCT marker, e.g. `Intervention 2: `.
static NUMBERED_INTERVENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Intervention \d+: ").expect("valid intervention marker regex")
});

/// Parallel arm-group and intervention lists for one row.
#[derive(Debug, Default)]
pub struct ArmExtraction {
    pub arm_groups: Option<Vec<ArmGroup>>,
    pub interventions: Option<Vec<Intervention>>,
}

/// Extract arms/interventions for rows from the registries that support it.
pub fn extract_arms(row: &TrialRow) -> ArmExtraction {
    let Some(text) = row.get(columns::INTERVENTION) else {
        return ArmExtraction::default();
    };
    let Some(source) = row.get(columns::SOURCE_REGISTER).and_then(recognize_arm_source)
    else {
        return ArmExtraction::default();
    };
    match source {
        ArmSource::Chictr => chictr(text),
        ArmSource::Pactr => pactr(text),
        ArmSource::Drks => drks(text),
        ArmSource::Irct => irct(text),
        ArmSource::Euctr => euctr(text),
    }
}

/// ChiCTR: semicolon-delimited groups, each a colon-delimited
/// `arm: intervention` pair.
fn chictr(text: &str) -> ArmExtraction {
    let mut arms = Vec::new();
    let mut interventions = Vec::new();
    for group in text.split(';') {
        let parts: Vec<&str> = group.split(':').collect();
        if parts.len() < 2 {
            continue;
        }
        let intervention = Intervention::named(parts[1].trim());
        let mut arm = ArmGroup::new();
        arm.name = Some(parts[0].trim().to_string());
        arm.intervention = Some(vec![intervention.clone()]);
        arms.push(arm);
        interventions.push(intervention);
    }
    wrap(arms, interventions)
}

/// PACTR: semicolon-delimited flat names; arm and intervention share the
/// name.
fn pactr(text: &str) -> ArmExtraction {
    let mut arms = Vec::new();
    let mut interventions = Vec::new();
    for name in text.split(';') {
        let name = name.trim();
        if name.len() <= 1 {
            continue;
        }
        let intervention = Intervention::named(name);
        let mut arm = ArmGroup::new();
        arm.name = Some(name.to_string());
        arm.intervention = Some(vec![intervention.clone()]);
        arms.push(arm);
        interventions.push(intervention);
    }
    wrap(arms, interventions)
}

/// DRKS: `Intervention N: ` markers separate the arms.
fn drks(text: &str) -> ArmExtraction {
    let mut arms = Vec::new();
    let mut interventions = Vec::new();
    for name in split_numbered(text) {
        let intervention = Intervention::named(name.as_str());
        let mut arm = ArmGroup::new();
        arm.name = Some(name);
        arm.intervention = Some(vec![intervention.clone()]);
        arms.push(arm);
        interventions.push(intervention);
    }
    wrap(arms, interventions)
}

/// IRCT: numbered markers plus colon-delimited `name: description` pairs;
/// an entry without a colon keeps its whole text as the description.
fn irct(text: &str) -> ArmExtraction {
    let mut arms = Vec::new();
    let mut interventions = Vec::new();
    for segment in split_numbered(text) {
        let mut arm = ArmGroup::new();
        let mut intervention = Intervention::new();
        match segment.split_once(':') {
            Some((name, description)) => {
                let name = name.trim().to_string();
                let description = description.trim().to_string();
                arm.name = Some(name.clone());
                arm.description = Some(description.clone());
                intervention.name = Some(name);
                intervention.description = Some(description);
            }
            None => {
                arm.description = Some(segment.clone());
                intervention.description = Some(segment);
            }
        }
        arm.intervention = Some(vec![intervention.clone()]);
        arms.push(arm);
        interventions.push(intervention);
    }
    wrap(arms, interventions)
}

/// EU-CTR: `<br><br>`-separated product blocks of `key: value` lines.
/// Produces interventions only; the EU design text has no arm structure.
fn euctr(text: &str) -> ArmExtraction {
    let mut interventions = Vec::new();
    for block in text.split("<br><br>") {
        if block.trim().is_empty() {
            continue;
        }
        let lines: Vec<&str> = block.split("<br>").collect();
        let mut product_name = None;
        let mut trade_name = None;
        let mut cas_number = None;
        for line in &lines {
            if let Some((key, value)) = line.split_once(": ") {
                match key.trim() {
                    "Product Name" => product_name = Some(value.trim()),
                    "Trade Name" => trade_name = Some(value.trim()),
                    "CAS Number" => cas_number = Some(value.trim()),
                    _ => {}
                }
            }
        }
        let mut intervention = Intervention::new();
        intervention.description = Some(lines.join("\n"));
        intervention.name = trade_name.or(product_name).map(str::to_owned);
        intervention.identifier = cas_number.map(str::to_owned);
        interventions.push(intervention);
    }
    wrap(Vec::new(), interventions)
}

/// Replace the repeating numbered marker with a delimiter that cannot occur
/// in the text, then split on it. Single-character fragments are noise.
fn split_numbered(text: &str) -> Vec<String> {
    NUMBERED_INTERVENTION
        .replace_all(text, "****")
        .split("****")
        .map(str::trim)
        .filter(|segment| segment.len() > 1)
        .map(str::to_owned)
        .collect()
}

fn wrap(arms: Vec<ArmGroup>, interventions: Vec<Intervention>) -> ArmExtraction {
    ArmExtraction {
        arm_groups: if arms.is_empty() { None } else { Some(arms) },
        interventions: if interventions.is_empty() {
            None
        } else {
            Some(interventions)
        },
    }
}
