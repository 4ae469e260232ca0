//! Primary outcome extraction.

use ictrp_model::Outcome;

/// Split a semicolon-delimited outcome-measure string.
pub fn extract_outcomes(raw: &str) -> Option<Vec<Outcome>> {
    let outcomes: Vec<Outcome> = raw
        .split(';')
        .map(str::trim)
        .filter(|measure| !measure.is_empty())
        .map(Outcome::primary)
        .collect();
    if outcomes.is_empty() { None } else { Some(outcomes) }
}

#[cfg(test)]
mod tests {
    use super::extract_outcomes;

    #[test]
    fn each_measure_is_primary() {
        let outcomes = extract_outcomes("mortality;viral clearance;").unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.outcome_type == "primary"));
        assert_eq!(outcomes[1].outcome_measure, "viral clearance");
    }

    #[test]
    fn all_empty_yields_absent() {
        assert!(extract_outcomes(";;").is_none());
    }
}
