//! Shared argument helpers

/// Split a comma-separated option into trimmed, non-empty items.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|raw| split_csv(raw))
}

/// Flatten repeated, comma-separable values; `None` when nothing was given.
pub fn parse_repeated_csv(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().flat_map(|v| split_csv(v)).collect())
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}
