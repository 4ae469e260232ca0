//! Country reference loading.
//!
//! The reference dataset (derived from Natural Earth) maps country names to
//! their canonical name and ISO3 code. It is loaded once before any row
//! processing; an unreadable file is a hard error, not a diagnostic.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use ictrp_model::{CountryRecord, CountryTable};

pub const NAME_COLUMN: &str = "name";
pub const COUNTRY_NAME_COLUMN: &str = "country_name";
pub const ISO3_COLUMN: &str = "country_iso3";

/// Load the country lookup table from the reference CSV.
pub fn load_country_table(path: &Path) -> Result<CountryTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read country reference: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read country reference header: {}", path.display()))?
        .clone();
    let position = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().trim_matches('\u{feff}') == name)
            .with_context(|| format!("country reference is missing the `{name}` column"))
    };
    let name_idx = position(NAME_COLUMN)?;
    let canonical_idx = position(COUNTRY_NAME_COLUMN)?;
    let iso3_idx = position(ISO3_COLUMN)?;

    let mut table = CountryTable::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("read country reference: {}", path.display()))?;
        let key = record.get(name_idx).unwrap_or("").trim();
        let canonical = record.get(canonical_idx).unwrap_or("").trim();
        let iso3 = record.get(iso3_idx).unwrap_or("").trim();
        if key.is_empty() || canonical.is_empty() {
            continue;
        }
        table.insert(
            key,
            CountryRecord {
                name: canonical.to_string(),
                iso3: iso3.to_string(),
            },
        );
    }
    debug!(countries = table.len(), "country reference loaded");
    Ok(table)
}
