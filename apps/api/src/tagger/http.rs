//! HTTP backend for the entity tagging seam.
//!
//! Talks to the NER sidecar (`POST {base}/entities`) over a client built
//! once at startup. One attempt per call — scoring requests fail fast
//! rather than retrying a degraded model service.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tagger::{EntityTagger, TaggedSpan, TaggerError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TagResponse {
    entities: Vec<TaggedSpan>,
}

/// Tagger backend that delegates to an NER service over HTTP.
#[derive(Clone)]
pub struct HttpEntityTagger {
    client: Client,
    base_url: String,
}

impl HttpEntityTagger {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl EntityTagger for HttpEntityTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>, TaggerError> {
        let url = format!("{}/entities", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&TagRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TaggerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let tagged: TagResponse = response.json().await?;
        debug!("tagger returned {} spans", tagged.entities.len());

        Ok(tagged.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let tagger = HttpEntityTagger::new("http://localhost:8090/".to_string());
        assert_eq!(tagger.base_url, "http://localhost:8090");
    }

    #[test]
    fn test_tag_response_deserializes_sidecar_payload() {
        let payload = r#"{
            "entities": [
                {"text": "Google", "label": "ORG"},
                {"text": "last Tuesday", "label": "DATE"}
            ]
        }"#;
        let parsed: TagResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.entities.len(), 2);
        assert_eq!(parsed.entities[0].text, "Google");
    }
}
