//! Entity tagging — the external NLP capability behind a pluggable trait.
//!
//! The tagger is a black box: given text, produce labeled entity spans. Its
//! correctness bound is the underlying model's; this module owns only the
//! seam (the trait carried in `AppState` as `Arc<dyn EntityTagger>`), the
//! label filter, and output casing.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;

pub use http::HttpEntityTagger;

/// Span label produced by the tagger. Unknown labels deserialize to `Other`
/// and are dropped by the experience filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Org,
    WorkOfArt,
    Product,
    #[serde(other)]
    Other,
}

/// A single labeled span returned by the tagger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tagger returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// The entity tagging seam. Implement this to swap the NER backend without
/// touching the scoring pipeline.
#[async_trait]
pub trait EntityTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>, TaggerError>;
}

/// Retains organization, creative-work, and product spans as lowercased
/// strings — the experience-keyword proxies the pipeline matches against.
pub fn experience_entities(spans: &[TaggedSpan]) -> HashSet<String> {
    spans
        .iter()
        .filter(|span| {
            matches!(
                span.label,
                EntityLabel::Org | EntityLabel::WorkOfArt | EntityLabel::Product
            )
        })
        .map(|span| span.text.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, label: EntityLabel) -> TaggedSpan {
        TaggedSpan {
            text: text.to_string(),
            label,
        }
    }

    #[test]
    fn test_filter_keeps_qualifying_labels_only() {
        let spans = vec![
            span("Google", EntityLabel::Org),
            span("Kubernetes", EntityLabel::Product),
            span("The Pragmatic Programmer", EntityLabel::WorkOfArt),
            span("Berlin", EntityLabel::Other),
        ];
        let entities = experience_entities(&spans);
        assert_eq!(entities.len(), 3);
        assert!(entities.contains("google"));
        assert!(entities.contains("kubernetes"));
        assert!(entities.contains("the pragmatic programmer"));
        assert!(!entities.contains("berlin"));
    }

    #[test]
    fn test_filter_lowercases_output() {
        let entities = experience_entities(&[span("AWS", EntityLabel::Org)]);
        assert!(entities.contains("aws"));
        assert!(!entities.contains("AWS"));
    }

    #[test]
    fn test_no_qualifying_spans_yields_empty_set() {
        let spans = vec![span("Tuesday", EntityLabel::Other)];
        assert!(experience_entities(&spans).is_empty());
        assert!(experience_entities(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_entities_collapse() {
        let spans = vec![
            span("Google", EntityLabel::Org),
            span("google", EntityLabel::Org),
        ];
        assert_eq!(experience_entities(&spans).len(), 1);
    }

    #[test]
    fn test_label_wire_names() {
        assert_eq!(
            serde_json::to_string(&EntityLabel::WorkOfArt).unwrap(),
            r#""WORK_OF_ART""#
        );
        let label: EntityLabel = serde_json::from_str(r#""ORG""#).unwrap();
        assert_eq!(label, EntityLabel::Org);
    }

    #[test]
    fn test_unknown_label_deserializes_to_other() {
        let label: EntityLabel = serde_json::from_str(r#""GPE""#).unwrap();
        assert_eq!(label, EntityLabel::Other);
        let label: EntityLabel = serde_json::from_str(r#""DATE""#).unwrap();
        assert_eq!(label, EntityLabel::Other);
    }
}
