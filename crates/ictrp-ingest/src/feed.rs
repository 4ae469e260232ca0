//! WHO feed ingestion.
//!
//! Reads the published CSV snapshot into in-memory rows. The first record is
//! the header; blank values are dropped at read time so every downstream
//! field access sees either real text or nothing.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use ictrp_model::TrialRow;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read the feed CSV into rows keyed by the header's column names.
pub fn read_feed(path: &Path) -> Result<Vec<TrialRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read feed csv: {}", path.display()))?;
    let mut records = reader.records();
    let Some(header_record) = records.next() else {
        return Ok(Vec::new());
    };
    let header_record =
        header_record.with_context(|| format!("read feed header: {}", path.display()))?;
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record.with_context(|| format!("read feed record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = TrialRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = normalize_cell(record.get(idx).unwrap_or(""));
            if !value.is_empty() {
                row.insert(header.clone(), value);
            }
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "feed loaded");
    Ok(rows)
}
