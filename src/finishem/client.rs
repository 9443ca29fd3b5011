use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Fixed category every created task record carries
pub const TASK_KIND: &str = "TODO";

const CREATE_ITEM_MUTATION: &str = r#"
mutation CreateItem(
  $key: String!
  $type: String!
  $text: String!
) {
  createItem(
    input: {
      key: $key
      type: $type
      text: $text
    }
  ) {
    key
    type
    text
    project {
      key
    }
  }
}
"#;

/// Task store write failure; the transport status or the endpoint's first
/// reported error message
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct RemoteError(pub String);

/// A task record to be created remotely
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    /// Client-generated key, globally unique per request and never reused
    pub key: String,
    pub kind: String,
    pub text: String,
}

impl NewTask {
    /// Build a new task for the given text with a fresh unique key
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4().to_string(),
            kind: TASK_KIND.to_string(),
            text: text.into(),
        }
    }
}

/// The record echo the endpoint returns on creation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedTask {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub project: Option<ProjectRef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<CreateItemData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct CreateItemData {
    #[serde(rename = "createItem")]
    create_item: Option<CreatedTask>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Remote creation of one task record
#[async_trait]
pub trait TaskCreator: Send + Sync {
    async fn create_task(&self, task: NewTask) -> Result<CreatedTask, RemoteError>;
}

/// GraphQL client for the Finish Em endpoint
pub struct FinishEmClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FinishEmClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TaskCreator for FinishEmClient {
    async fn create_task(&self, task: NewTask) -> Result<CreatedTask, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "query": CREATE_ITEM_MUTATION,
                "variables": {
                    "key": task.key,
                    "type": task.kind,
                    "text": task.text,
                },
            }))
            .send()
            .await
            .map_err(|e| RemoteError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteError(format!(
                "Failed to send todo to Finish Em - {}",
                response.status()
            )));
        }

        let body: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| RemoteError(e.to_string()))?;

        if let Some(errors) = body.errors {
            if let Some(first) = errors.first() {
                return Err(RemoteError(first.message.clone()));
            }
        }

        body.data
            .and_then(|d| d.create_item)
            .ok_or_else(|| RemoteError("endpoint returned no created item".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_carries_fixed_kind() {
        let task = NewTask::new("Buy milk");
        assert_eq!(task.kind, TASK_KIND);
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn test_new_task_keys_are_unique() {
        let keys: Vec<String> = (0..50).map(|_| NewTask::new("x").key).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn test_created_task_deserializes_endpoint_shape() {
        let json = r#"{
            "key": "k1",
            "type": "TODO",
            "text": "Buy milk",
            "project": { "key": "inbox" }
        }"#;
        let created: CreatedTask = serde_json::from_str(json).unwrap();
        assert_eq!(created.kind, "TODO");
        assert_eq!(created.project.unwrap().key, "inbox");
    }

    #[test]
    fn test_graphql_error_body_parses() {
        let json = r#"{ "errors": [{ "message": "boom" }] }"#;
        let body: GraphqlResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.errors.unwrap()[0].message, "boom");
        assert!(body.data.is_none());
    }
}
