use crate::craft::{BlockKind, DocumentHost, HostError};

/// One unchecked to-do block, lifted into memory.
///
/// Candidates live only for the current scan: every re-scan fully replaces
/// the set, and a completed submission cycle discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateItem {
    /// Stable identifier of the originating block, unique within one snapshot
    pub id: String,
    /// Flattened human-readable content of the item
    pub text: String,
    /// Whether the user wants this item submitted; defaults to true
    pub selected: bool,
}

/// Result of a document scan.
///
/// An empty document is not an error; the UI renders an informational
/// notice for `Empty` and an error state only for a failed host query.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Found(Vec<CandidateItem>),
    Empty,
}

/// Scan the current document for unchecked to-do items.
///
/// Keeps exactly the top-level blocks whose structural role is to-do and
/// whose state is not checked. Every candidate starts selected (opt-out
/// model). Host failures surface as `HostError` with the host's message.
pub async fn scan<H: DocumentHost>(host: &H) -> Result<ScanOutcome, HostError> {
    let page = host.get_current_page().await?;

    let candidates: Vec<CandidateItem> = page
        .subblocks
        .iter()
        .filter_map(|block| match block.kind() {
            BlockKind::Todo { checked: false } => Some(CandidateItem {
                id: block.id.clone(),
                text: block.flatten_text(),
                selected: true,
            }),
            _ => None,
        })
        .collect();

    if candidates.is_empty() {
        tracing::info!("scan found no unchecked todos");
        Ok(ScanOutcome::Empty)
    } else {
        tracing::info!(count = candidates.len(), "scan found unchecked todos");
        Ok(ScanOutcome::Found(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::craft::blocks::{Block, ListStyle, Page, TextRun};
    use async_trait::async_trait;

    /// Host fake that serves a fixed page, or a fixed failure
    struct FakeHost {
        page: Result<Page, HostError>,
    }

    #[async_trait]
    impl DocumentHost for FakeHost {
        async fn get_current_page(&self) -> Result<Page, HostError> {
            self.page.clone()
        }

        async fn select_blocks(&self, _ids: &[String]) -> Result<Vec<Block>, HostError> {
            unimplemented!("extractor never selects blocks")
        }

        async fn update_blocks(&self, _blocks: &[Block]) -> Result<(), HostError> {
            unimplemented!("extractor never updates blocks")
        }
    }

    fn todo(id: &str, text: &str, state: &str) -> Block {
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

    fn paragraph(id: &str, text: &str) -> Block {
        Block {
            id: id.to_string(),
            block_type: "textBlock".to_string(),
            list_style: None,
            content: vec![TextRun {
                text: text.to_string(),
            }],
        }
    }

    fn page(subblocks: Vec<Block>) -> Page {
        Page {
            id: "page".to_string(),
            subblocks,
        }
    }

    #[tokio::test]
    async fn test_scan_keeps_only_unchecked_todos() {
        let host = FakeHost {
            page: Ok(page(vec![
                todo("a", "Buy milk", "unchecked"),
                todo("b", "Pay rent", "checked"),
                todo("c", "Walk dog", "unchecked"),
                paragraph("d", "Not a todo"),
            ])),
        };

        let outcome = scan(&host).await.unwrap();
        let items = match outcome {
            ScanOutcome::Found(items) => items,
            ScanOutcome::Empty => panic!("expected candidates"),
        };

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "c");
        assert!(items.iter().all(|i| i.selected));
    }

    #[tokio::test]
    async fn test_scan_flattens_text_runs_in_order() {
        let mut block = todo("a", "Buy", "unchecked");
        block.content.push(TextRun {
            text: "milk".to_string(),
        });
        let host = FakeHost {
            page: Ok(page(vec![block])),
        };

        match scan(&host).await.unwrap() {
            ScanOutcome::Found(items) => assert_eq!(items[0].text, "Buy,milk"),
            ScanOutcome::Empty => panic!("expected candidates"),
        }
    }

    #[tokio::test]
    async fn test_scan_empty_document_is_not_an_error() {
        let host = FakeHost {
            page: Ok(page(vec![
                todo("a", "Done already", "checked"),
                paragraph("b", "Prose"),
            ])),
        };

        assert_eq!(scan(&host).await.unwrap(), ScanOutcome::Empty);
    }

    #[tokio::test]
    async fn test_scan_surfaces_host_failure() {
        let host = FakeHost {
            page: Err(HostError("no document open".to_string())),
        };

        let err = scan(&host).await.unwrap_err();
        assert_eq!(err, HostError("no document open".to_string()));
    }

    #[tokio::test]
    async fn test_scan_is_idempotent_for_unchanged_document() {
        let host = FakeHost {
            page: Ok(page(vec![
                todo("a", "Buy milk", "unchecked"),
                todo("b", "Pay rent", "checked"),
            ])),
        };

        let first = scan(&host).await.unwrap();
        let second = scan(&host).await.unwrap();
        assert_eq!(first, second);
    }
}
