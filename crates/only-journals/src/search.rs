//! Substring search over journal entries

use serde_json::Value;

/// Keys of the entries whose `fields` contain `term`.
///
/// `entries` is either an object (keys are returned) or an array (indices
/// are returned as strings). A field matches when it is a non-empty string containing
/// the term, or an array with such a string at any depth.
pub fn search_entries(
    entries: &Value,
    term: &str,
    fields: &[&str],
    case_sensitive: bool,
) -> Vec<String> {
    let needle = if case_sensitive {
        term.to_string()
    } else {
        term.to_lowercase()
    };

    let entry_matches = |entry: &Value| {
        fields.iter().any(|field| {
            entry
                .get(*field)
                .is_some_and(|value| value_matches(value, &needle, case_sensitive))
        })
    };

    match entries {
        Value::Object(map) => map
            .iter()
            .filter(|(_, entry)| entry_matches(*entry))
            .map(|(key, _)| key.clone())
            .collect(),
        Value::Array(list) => list
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry_matches(*entry))
            .map(|(index, _)| index.to_string())
            .collect(),
        _ => Vec::new(),
    }
}

fn value_matches(value: &Value, needle: &str, case_sensitive: bool) -> bool {
    match value {
        // Empty fields never match, not even an empty term
        Value::String(s) if s.is_empty() => false,
        Value::String(s) if case_sensitive => s.contains(needle),
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items
            .iter()
            .any(|item| value_matches(item, needle, case_sensitive)),
        _ => false,
    }
}
