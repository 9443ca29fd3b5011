use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delimiter used when flattening a block's inline text runs
pub const TEXT_RUN_DELIMITER: &str = ",";

/// Opaque host failure: the editor only reports a human-readable message,
/// never a structured error code
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct HostError(pub String);

/// Uniform response envelope used by every host endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HostEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> HostEnvelope<T> {
    /// Unwrap the envelope into the payload, or the host's failure message
    pub fn into_result(self) -> Result<Option<T>, HostError> {
        if self.status == "success" {
            Ok(self.data)
        } else {
            Err(HostError(
                self.message
                    .unwrap_or_else(|| format!("host returned status {:?}", self.status)),
            ))
        }
    }
}

/// The full current document as the host reports it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub subblocks: Vec<Block>,
}

/// One block of the document tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_style: Option<ListStyle>,
    #[serde(default)]
    pub content: Vec<TextRun>,
}

/// List styling of a text block; carries the to-do check state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListStyle {
    #[serde(rename = "type")]
    pub style_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One inline text run inside a block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextRun {
    pub text: String,
}

/// Closed structural classification of a block.
///
/// The host's representation is stringly typed (`type`, `listStyle.type`,
/// `listStyle.state`); it is decoded exactly once, here, so the rest of the
/// code never re-checks string discriminators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockKind {
    Todo { checked: bool },
    Other,
}

impl Block {
    /// Classify this block into the closed `BlockKind` set
    pub fn kind(&self) -> BlockKind {
        if self.block_type != "textBlock" {
            return BlockKind::Other;
        }
        match &self.list_style {
            Some(style) if style.style_type == "todo" => BlockKind::Todo {
                checked: style.state.as_deref() == Some("checked"),
            },
            _ => BlockKind::Other,
        }
    }

    /// Flatten the block's inline text runs into one human-readable string
    pub fn flatten_text(&self) -> String {
        self.content
            .iter()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join(TEXT_RUN_DELIMITER)
    }

    /// Mark the block's to-do state as checked.
    ///
    /// Only meaningful for blocks classified as `BlockKind::Todo`; callers
    /// must classify first.
    pub fn set_checked(&mut self) {
        if let Some(style) = &mut self.list_style {
            style.state = Some("checked".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_block(id: &str, text: &str, state: &str) -> Block {
        Block {
            id: id.to_string(),
            block_type: "textBlock".to_string(),
            list_style: Some(ListStyle {
                style_type: "todo".to_string(),
                state: Some(state.to_string()),
            }),
            content: vec![TextRun {
                text: text.to_string(),
            }],
        }
    }

    #[test]
    fn test_kind_unchecked_todo() {
        let block = todo_block("b1", "Buy milk", "unchecked");
        assert_eq!(block.kind(), BlockKind::Todo { checked: false });
    }

    #[test]
    fn test_kind_checked_todo() {
        let block = todo_block("b1", "Pay rent", "checked");
        assert_eq!(block.kind(), BlockKind::Todo { checked: true });
    }

    #[test]
    fn test_kind_plain_text_block() {
        let block = Block {
            id: "b2".to_string(),
            block_type: "textBlock".to_string(),
            list_style: None,
            content: vec![],
        };
        assert_eq!(block.kind(), BlockKind::Other);
    }

    #[test]
    fn test_kind_non_text_block() {
        let block = Block {
            id: "b3".to_string(),
            block_type: "imageBlock".to_string(),
            list_style: Some(ListStyle {
                style_type: "todo".to_string(),
                state: None,
            }),
            content: vec![],
        };
        assert_eq!(block.kind(), BlockKind::Other);
    }

    #[test]
    fn test_flatten_text_joins_runs() {
        let mut block = todo_block("b1", "Buy", "unchecked");
        block.content.push(TextRun {
            text: "milk".to_string(),
        });
        assert_eq!(block.flatten_text(), "Buy,milk");
    }

    #[test]
    fn test_set_checked() {
        let mut block = todo_block("b1", "Buy milk", "unchecked");
        block.set_checked();
        assert_eq!(block.kind(), BlockKind::Todo { checked: true });
    }

    #[test]
    fn test_envelope_success_and_failure() {
        let ok: HostEnvelope<i32> = serde_json::from_str(r#"{"status":"success","data":7}"#).unwrap();
        assert_eq!(ok.into_result().unwrap(), Some(7));

        let err: HostEnvelope<i32> =
            serde_json::from_str(r#"{"status":"error","message":"no document open"}"#).unwrap();
        assert_eq!(
            err.into_result().unwrap_err(),
            HostError("no document open".to_string())
        );
    }

    #[test]
    fn test_block_deserializes_host_wire_shape() {
        let json = r#"{
            "id": "abc",
            "type": "textBlock",
            "listStyle": { "type": "todo", "state": "unchecked" },
            "content": [{ "text": "Buy milk" }]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind(), BlockKind::Todo { checked: false });
        assert_eq!(block.flatten_text(), "Buy milk");
    }
}
