use async_trait::async_trait;
use serde_json::json;

use super::blocks::{Block, HostEnvelope, HostError, Page};

/// Block read/select/update operations exposed by the document editor.
///
/// The sync core only talks to this trait; tests substitute an in-memory
/// host, production uses [`HttpDocumentHost`].
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Return the full current document structure
    async fn get_current_page(&self) -> Result<Page, HostError>;

    /// Resolve opaque block ids into live, editable block handles.
    /// Must be called before any mutation.
    async fn select_blocks(&self, ids: &[String]) -> Result<Vec<Block>, HostError>;

    /// Persist mutated blocks; receives the full mutated block, not a diff
    async fn update_blocks(&self, blocks: &[Block]) -> Result<(), HostError>;
}

/// JSON-over-HTTP client for the local editor bridge
pub struct HttpDocumentHost {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DocumentHost for HttpDocumentHost {
    async fn get_current_page(&self) -> Result<Page, HostError> {
        let response = self
            .client
            .get(format!("{}/page", self.base_url))
            .send()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        let envelope: HostEnvelope<Page> = response
            .json()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        envelope
            .into_result()?
            .ok_or_else(|| HostError("host returned no page data".to_string()))
    }

    async fn select_blocks(&self, ids: &[String]) -> Result<Vec<Block>, HostError> {
        let response = self
            .client
            .post(format!("{}/blocks/select", self.base_url))
            .json(&json!({ "ids": ids }))
            .send()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        let envelope: HostEnvelope<Vec<Block>> = response
            .json()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        Ok(envelope.into_result()?.unwrap_or_default())
    }

    async fn update_blocks(&self, blocks: &[Block]) -> Result<(), HostError> {
        let response = self
            .client
            .post(format!("{}/blocks/update", self.base_url))
            .json(&json!({ "blocks": blocks }))
            .send()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        let envelope: HostEnvelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| HostError(e.to_string()))?;

        envelope
            .into_result()?
            .ok_or_else(|| HostError("host failed to update anything".to_string()))?;
        Ok(())
    }
}
