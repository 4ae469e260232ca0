//! Country splitting and standardization.
//!
//! The feed's `Countries` column uses commas both as delimiters and inside
//! certain country names. A fixed substitution table rewrites the known
//! comma-bearing phrasings before splitting; each rule is independent and
//! longer phrasings are listed before their prefixes.

use ictrp_model::{CountryTable, Place};
use tracing::warn;

/// Comma-bearing phrasings protected before the split.
const COMMA_SAFE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Virgin Islands, U.S.", "United States of America"),
    ("Virgin Islands, British", "United Kingdom"),
    ("Korea, North", "North Korea"),
    ("Korea, South", "South Korea"),
    ("Korea, Republic of", "South Korea"),
    ("Iran, Islamic Republic of", "Iran"),
    (
        "Congo, The Democratic Republic of the",
        "Democratic Republic of the Congo",
    ),
    (
        "Congo, Democratic Republic of the",
        "Democratic Republic of the Congo",
    ),
    ("Congo, Democratic Republic", "Democratic Republic of the Congo"),
    ("Congo, Republic of the", "Republic of the Congo"),
    ("Congo, Republic of", "Republic of the Congo"),
];

/// Rewrite the known ambiguous-comma country phrasings. Idempotent: no
/// replacement contains any of the patterns.
pub fn apply_substitutions(raw: &str) -> String {
    let mut text = raw.to_string();
    for (pattern, replacement) in COMMA_SAFE_SUBSTITUTIONS {
        if text.contains(pattern) {
            text = text.replace(pattern, replacement);
        }
    }
    text
}

/// Split a delimited country string into standardized study locations.
pub fn split_countries(raw: &str, table: &CountryTable) -> Option<Vec<Place>> {
    let protected = apply_substitutions(raw);
    let places: Vec<Place> = protected
        .split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| Place::country(standardize_country(token, table)))
        .collect();
    if places.is_empty() { None } else { Some(places) }
}

/// Canonical name for one country; a miss passes the input through with a
/// diagnostic.
pub fn standardize_country(name: &str, table: &CountryTable) -> String {
    match table.lookup(name) {
        Some(record) => record.name.clone(),
        None => {
            warn!(country = name, "no country match found");
            name.trim().to_string()
        }
    }
}
