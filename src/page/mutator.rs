//! Inserting and removing entries in a located array body.
//!
//! Entries are matched as single-level brace blocks. That is a structural
//! precondition of this module: an entry whose field values contain nested
//! `{ ... }` objects will not match and cannot be edited here. The page's
//! entry shapes (flat string/number/array fields) satisfy it.

use regex::Regex;

use super::error::{PatchError, PatchResult};

/// Appends a serialised entry to an array body.
///
/// A non-empty body gets a trailing comma first unless it already ends with
/// one (idempotent — never doubles the comma), then a newline and the entry.
/// An empty or whitespace-only body becomes just a newline and the entry.
#[must_use]
pub fn insert_entry(body: &str, entry: &str) -> String {
    if body.trim().is_empty() {
        return format!("\n{entry}");
    }
    let mut content = body.to_string();
    if !content.trim_end().ends_with(',') {
        content = format!("{},", content.trim_end());
    }
    format!("{content}\n{entry}")
}

/// Removes every entry whose `key` field equals `value` exactly.
///
/// Returns the cleaned body and the number of entries removed. The caller
/// treats 0 as "not found" and more than 1 as an ambiguous multi-match;
/// both are reported conditions, not failures. Trailing whitespace and a
/// now-dangling trailing comma are trimmed so the array stays valid.
///
/// # Errors
///
/// Returns [`PatchError::Pattern`] if the search pattern fails to compile
/// (not expected: `key` and `value` are escaped before splicing).
pub fn remove_entries(body: &str, key: &str, value: &str) -> PatchResult<(String, usize)> {
    let pattern = format!(
        "\\{{[^{{}}]*{}:\\s*\"{}\"[^{{}}]*\\}},?",
        regex::escape(key),
        regex::escape(value)
    );
    let re = Regex::new(&pattern).map_err(|e| PatchError::pattern(&e))?;

    let count = re.find_iter(body).count();
    if count == 0 {
        return Ok((body.to_string(), 0));
    }

    let stripped = re.replace_all(body, "");
    let cleaned = stripped.trim_end().trim_end_matches(',').to_string();
    Ok((cleaned, count))
}

/// Reports whether the body already holds an entry with `key: "value"`.
/// Used for the duplicate-key warning before insertion; collisions warn,
/// they never block.
///
/// # Errors
///
/// Returns [`PatchError::Pattern`] if the search pattern fails to compile.
pub fn contains_key(body: &str, key: &str, value: &str) -> PatchResult<bool> {
    let pattern = format!(
        "{}:\\s*\"{}\"",
        regex::escape(key),
        regex::escape(value)
    );
    let re = Regex::new(&pattern).map_err(|e| PatchError::pattern(&e))?;
    Ok(re.is_match(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_A: &str = "            {\n                name: \"Alpha\"\n            }";
    const ENTRY_B: &str = "            {\n                name: \"Beta\"\n            }";

    #[test]
    fn insert_into_empty_body() {
        let body = insert_entry("", ENTRY_A);
        assert_eq!(body, format!("\n{ENTRY_A}"));
    }

    #[test]
    fn insert_into_whitespace_body() {
        let body = insert_entry("\n        ", ENTRY_A);
        assert_eq!(body, format!("\n{ENTRY_A}"));
    }

    #[test]
    fn insert_appends_separator_once() {
        let first = insert_entry("", ENTRY_A);
        let second = insert_entry(&first, ENTRY_B);
        assert!(second.contains("}\n,\n") || second.contains("},\n"));
        assert!(!second.contains(",,"));

        // Already-trailing comma must not be doubled.
        let with_comma = format!("{first},");
        let third = insert_entry(&with_comma, ENTRY_B);
        assert!(!third.contains(",,"));
    }

    #[test]
    fn remove_matching_entry() {
        let body = insert_entry(&insert_entry("", ENTRY_A), ENTRY_B);
        let (cleaned, count) = remove_entries(&body, "name", "Beta").unwrap();
        assert_eq!(count, 1);
        assert!(cleaned.contains("Alpha"));
        assert!(!cleaned.contains("Beta"));
        assert!(!cleaned.trim_end().ends_with(','));
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let body = insert_entry("", ENTRY_A);
        let (cleaned, count) = remove_entries(&body, "name", "Gamma").unwrap();
        assert_eq!(count, 0);
        assert_eq!(cleaned, body);
    }

    #[test]
    fn remove_all_matches_and_report_count() {
        let body = insert_entry(&insert_entry("", ENTRY_A), ENTRY_A);
        let (cleaned, count) = remove_entries(&body, "name", "Alpha").unwrap();
        assert_eq!(count, 2);
        assert!(cleaned.trim().is_empty());
    }

    #[test]
    fn match_value_is_not_a_pattern() {
        let entry = "            {\n                name: \"A.B (v1)?\"\n            }";
        let body = insert_entry("", entry);
        // Metacharacters in the value must match literally, not as regex.
        let (_, count) = remove_entries(&body, "name", "A.B (v1)?").unwrap();
        assert_eq!(count, 1);
        let (_, none) = remove_entries(&body, "name", "AxB (v1)?").unwrap();
        assert_eq!(none, 0);
    }

    #[test]
    fn insert_then_remove_restores_body() {
        let original = insert_entry("", ENTRY_A);
        let grown = insert_entry(&original, ENTRY_B);
        let (restored, count) = remove_entries(&grown, "name", "Beta").unwrap();
        assert_eq!(count, 1);
        assert_eq!(restored.trim(), original.trim());
    }

    #[test]
    fn duplicate_detection() {
        let body = insert_entry("", ENTRY_A);
        assert!(contains_key(body.as_str(), "name", "Alpha").unwrap());
        assert!(!contains_key(body.as_str(), "name", "Beta").unwrap());
    }
}
