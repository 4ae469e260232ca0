//! Health condition splitting.

/// Split a possibly HTML-break- and semicolon-delimited condition string.
pub fn split_conditions(raw: &str) -> Option<Vec<String>> {
    let conditions: Vec<String> = raw
        .split("<br>")
        .flat_map(|part| part.split(';'))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect();
    if conditions.is_empty() {
        None
    } else {
        Some(conditions)
    }
}
