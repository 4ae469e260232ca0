//! Arm/intervention extraction tests, one block per registry strategy.

use ictrp_model::{TrialRow, columns};
use ictrp_normalize::arms::extract_arms;

fn row(register: &str, intervention: &str) -> TrialRow {
    TrialRow::new()
        .with(columns::SOURCE_REGISTER, register)
        .with(columns::INTERVENTION, intervention)
}

#[test]
fn chictr_colon_pairs_produce_parallel_lists() {
    let extraction = extract_arms(&row(
        "ChiCTR",
        "experimental group:Remdesivir;control group:placebo",
    ));
    let arms = extraction.arm_groups.unwrap();
    let interventions = extraction.interventions.unwrap();
    assert_eq!(arms.len(), 2);
    assert_eq!(interventions.len(), 2);
    assert_eq!(arms[0].name.as_deref(), Some("experimental group"));
    let embedded = arms[0].intervention.as_ref().unwrap();
    assert_eq!(embedded[0].name.as_deref(), Some("Remdesivir"));
    assert_eq!(interventions[1].name.as_deref(), Some("placebo"));
}

#[test]
fn chictr_groups_without_colon_are_skipped() {
    let extraction = extract_arms(&row("CHICTR", "no structure here"));
    assert!(extraction.arm_groups.is_none());
    assert!(extraction.interventions.is_none());
}

#[test]
fn pactr_flat_names_mirror_into_both_lists() {
    let extraction = extract_arms(&row("PACTR", "Hydroxychloroquine;Standard of care"));
    let arms = extraction.arm_groups.unwrap();
    let interventions = extraction.interventions.unwrap();
    assert_eq!(arms.len(), 2);
    assert_eq!(arms[1].name.as_deref(), Some("Standard of care"));
    assert_eq!(interventions[0].name.as_deref(), Some("Hydroxychloroquine"));
}

#[test]
fn drks_numbered_markers_split_the_text() {
    let extraction = extract_arms(&row(
        "German Clinical Trials Register",
        "Intervention 1: convalescent plasma Intervention 2: standard therapy",
    ));
    let arms = extraction.arm_groups.unwrap();
    assert_eq!(arms.len(), 2);
    assert_eq!(arms[0].name.as_deref(), Some("convalescent plasma"));
    assert_eq!(arms[1].name.as_deref(), Some("standard therapy"));
    assert_eq!(extraction.interventions.unwrap().len(), 2);
}

#[test]
fn irct_colon_entries_split_name_and_description() {
    let extraction = extract_arms(&row(
        "IRCT",
        "Intervention 1: Favipiravir: 1600 mg twice daily Intervention 2: Placebo",
    ));
    let arms = extraction.arm_groups.unwrap();
    assert_eq!(arms[0].name.as_deref(), Some("Favipiravir"));
    assert_eq!(arms[0].description.as_deref(), Some("1600 mg twice daily"));
    // The entry without a colon keeps its whole text as the description.
    assert_eq!(arms[1].name, None);
    assert_eq!(arms[1].description.as_deref(), Some("Placebo"));
    let interventions = extraction.interventions.unwrap();
    assert_eq!(interventions[0].name.as_deref(), Some("Favipiravir"));
    assert_eq!(interventions[1].description.as_deref(), Some("Placebo"));
}

#[test]
fn euctr_blocks_build_structured_interventions() {
    let text = "Product Name: Remdesivir<br>CAS Number: 1809249-37-3<br>Route: infusion\
                <br><br>Trade Name: Kaletra<br>Product Name: Lopinavir/Ritonavir";
    let extraction = extract_arms(&row("EU-CTR", text));
    assert!(extraction.arm_groups.is_none());
    let interventions = extraction.interventions.unwrap();
    assert_eq!(interventions.len(), 2);
    assert_eq!(interventions[0].name.as_deref(), Some("Remdesivir"));
    assert_eq!(interventions[0].identifier.as_deref(), Some("1809249-37-3"));
    assert!(
        interventions[0]
            .description
            .as_deref()
            .unwrap()
            .contains("Route: infusion")
    );
    // Trade name wins over product name.
    assert_eq!(interventions[1].name.as_deref(), Some("Kaletra"));
}

#[test]
fn unparseable_registries_yield_nothing() {
    let extraction = extract_arms(&row("ANZCTR", "drug A; drug B"));
    assert!(extraction.arm_groups.is_none());
    assert!(extraction.interventions.is_none());
}

#[test]
fn empty_intervention_text_yields_nothing() {
    let extraction = extract_arms(&TrialRow::new().with(columns::SOURCE_REGISTER, "ChiCTR"));
    assert!(extraction.arm_groups.is_none());
    assert!(extraction.interventions.is_none());
}
