use std::sync::Arc;

use futures::future::join_all;

use super::error::SyncError;
use crate::craft::{BlockKind, DocumentHost};
use crate::features::todos::CandidateItem;
use crate::finishem::{NewTask, TaskCreator};

/// Progress of one phase for one item during a cycle
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseOutcome {
    Pending,
    Succeeded,
    Failed(SyncError),
}

impl PhaseOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, PhaseOutcome::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PhaseOutcome::Failed(_))
    }
}

/// Per-item result of one sync cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ItemOutcome {
    pub id: String,
    pub text: String,
    pub remote: PhaseOutcome,
    pub local: PhaseOutcome,
}

impl ItemOutcome {
    fn pending(item: &CandidateItem) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            remote: PhaseOutcome::Pending,
            local: PhaseOutcome::Pending,
        }
    }
}

/// Outcome of one complete sync cycle.
///
/// Transient: it only drives UI affordances and logging; nothing persists it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub items: Vec<ItemOutcome>,
}

impl SyncReport {
    /// True only if the remote phase had zero failures and every local step
    /// succeeded
    pub fn all_succeeded(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.remote.is_succeeded() && item.local.is_succeeded())
    }

    /// Whether the cycle tripped the all-or-nothing remote gate
    pub fn remote_phase_failed(&self) -> bool {
        self.items.iter().any(|item| item.remote.is_failed())
    }

    pub fn local_failures(&self) -> usize {
        self.items.iter().filter(|item| item.local.is_failed()).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Drives one sync cycle: remote task creation for every confirmed item,
/// then completion-marking in the document.
///
/// The engine owns no candidate state. It consumes the confirmed snapshot,
/// returns a report, and leaves every UI-state transition to the caller.
pub struct SyncEngine<H, T> {
    host: Arc<H>,
    tasks: Arc<T>,
}

impl<H, T> Clone for SyncEngine<H, T> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl<H: DocumentHost, T: TaskCreator> SyncEngine<H, T> {
    pub fn new(host: Arc<H>, tasks: Arc<T>) -> Self {
        Self { host, tasks }
    }

    /// Run one cycle over the confirmed selection.
    ///
    /// Remote phase first: one create request per item, all issued
    /// concurrently and joined all-settled, each with a fresh unique key.
    /// Any remote failure fails the whole submission and the local phase is
    /// skipped. Local phase: per item, resolve the block, re-check its role,
    /// mark it checked, persist; a local failure is isolated to its item.
    pub async fn submit(&self, items: Vec<CandidateItem>) -> SyncReport {
        let mut outcomes: Vec<ItemOutcome> = items.iter().map(ItemOutcome::pending).collect();

        tracing::info!(count = items.len(), "sync cycle: remote phase");
        let requests = items.iter().map(|item| {
            let task = NewTask::new(&item.text);
            let tasks = Arc::clone(&self.tasks);
            async move { tasks.create_task(task).await }
        });
        let results = join_all(requests).await;

        for (outcome, result) in outcomes.iter_mut().zip(results) {
            match result {
                Ok(created) => {
                    tracing::debug!(key = %created.key, "remote task created");
                    outcome.remote = PhaseOutcome::Succeeded;
                }
                Err(e) => {
                    tracing::error!(text = %outcome.text, error = %e, "remote create failed");
                    outcome.remote = PhaseOutcome::Failed(SyncError::RemoteCreateFailed {
                        text: outcome.text.clone(),
                        reason: e.0,
                    });
                }
            }
        }

        if outcomes.iter().any(|o| o.remote.is_failed()) {
            tracing::error!("remote phase failed; local phase skipped");
            return SyncReport { items: outcomes };
        }

        tracing::info!("sync cycle: local phase");
        for outcome in outcomes.iter_mut() {
            outcome.local = match self.mark_checked(&outcome.id).await {
                Ok(()) => PhaseOutcome::Succeeded,
                Err(e) => {
                    tracing::error!(id = %outcome.id, error = %e, "local completion failed");
                    PhaseOutcome::Failed(e)
                }
            };
        }

        SyncReport { items: outcomes }
    }

    /// Resolve one block, confirm it is still a to-do, check it off, persist
    async fn mark_checked(&self, id: &str) -> Result<(), SyncError> {
        let ids = [id.to_string()];
        let blocks = self
            .host
            .select_blocks(&ids)
            .await
            .map_err(|e| SyncError::HostSelectFailed(e.0))?;

        let mut block = blocks
            .into_iter()
            .find(|b| b.id == id)
            .ok_or_else(|| SyncError::HostSelectFailed("block not found".to_string()))?;

        match block.kind() {
            BlockKind::Todo { .. } => {}
            BlockKind::Other => return Err(SyncError::NotATodoBlock),
        }

        block.set_checked();
        self.host
            .update_blocks(std::slice::from_ref(&block))
            .await
            .map_err(|e| SyncError::HostUpdateFailed(e.0))?;
        Ok(())
    }
}
