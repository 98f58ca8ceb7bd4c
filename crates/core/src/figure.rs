//! Helpers for historical figure records.
//!
//! Quotes and achievements are stored as serialized JSON string arrays in
//! TEXT columns. Decoding is lenient: anything that is not a JSON array of
//! strings decodes to an empty list so a bad row never breaks a page.

/// Decode a serialized JSON string array.
pub fn decode_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Encode a string list for storage.
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Display form of a lifespan, e.g. `1743 – 1803` or `b. 1950`.
pub fn lifespan(birth_year: Option<i32>, death_year: Option<i32>) -> Option<String> {
    match (birth_year, death_year) {
        (Some(b), Some(d)) => Some(format!("{b} – {d}")),
        (Some(b), None) => Some(format!("b. {b}")),
        (None, Some(d)) => Some(format!("d. {d}")),
        (None, None) => None,
    }
}
