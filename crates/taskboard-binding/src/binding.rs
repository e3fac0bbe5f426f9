//! Board binding: optimistic moves with background persistence.

use std::sync::Arc;

use taskboard_core::{reconcile, Board, CoreError, MoveDescriptor, Reconciliation, UpdateEntry};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::BindingConfig;
use crate::error::GatewayError;
use crate::gateway::{PersistenceGateway, TaskSource};
use crate::notify::{Notification, Notifier};

/// Shown when a move references a slot that holds no task.
pub const MOVE_FAILED_MESSAGE: &str = "An error occurred while moving the task, please try again.";

/// Shown when the gateway rejects a batch.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update tasks";

/// Shown when the gateway accepts a batch.
pub const UPDATE_SUCCEEDED_MESSAGE: &str = "Tasks updated successfully";

/// What became of a move handed to [`BoardBinding::handle_move`].
#[derive(Debug)]
pub enum MoveOutcome {
    /// The source slot held no task. The board is unchanged.
    Rejected(CoreError),
    /// Nothing to persist, e.g. a cancelled drag.
    Unchanged,
    /// The board shows the move; `handle` is persisting `batch`.
    Persisting {
        batch: Vec<UpdateEntry>,
        handle: JoinHandle<()>,
    },
}

impl MoveOutcome {
    /// Rows sent to the gateway, empty unless persisting.
    pub fn batch(&self) -> &[UpdateEntry] {
        match self {
            Self::Persisting { batch, .. } => batch.as_slice(),
            Self::Rejected(_) | Self::Unchanged => &[],
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Wait for the background persistence call, if any.
    pub async fn wait(self) {
        if let Self::Persisting { handle, .. } = self {
            if let Err(e) = handle.await {
                error!(error = %e, "Persistence task did not complete");
            }
        }
    }
}

struct Inner {
    board: RwLock<Board>,
    source: Arc<dyn TaskSource>,
    gateway: Arc<dyn PersistenceGateway>,
    notifier: Arc<dyn Notifier>,
    config: BindingConfig,
}

/// Owns the board a UI renders and keeps it in step with the backing store.
///
/// Moves are applied to the board before the gateway is called. A failed
/// batch is reported but not rolled back; the next [`refresh`](Self::refresh)
/// brings the board back in line with the store.
#[derive(Clone)]
pub struct BoardBinding {
    inner: Arc<Inner>,
}

impl BoardBinding {
    /// Create a binding with an empty board. Call [`refresh`](Self::refresh)
    /// to load it.
    pub fn new(
        source: Arc<dyn TaskSource>,
        gateway: Arc<dyn PersistenceGateway>,
        notifier: Arc<dyn Notifier>,
        config: BindingConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                board: RwLock::new(Board::empty()),
                source,
                gateway,
                notifier,
                config,
            }),
        }
    }

    /// Snapshot of the current board.
    pub async fn board(&self) -> Board {
        self.inner.board.read().await.clone()
    }

    /// Fetch the task list and rebuild the board from scratch.
    ///
    /// Returns the number of tasks on the new board.
    pub async fn refresh(&self) -> Result<usize, GatewayError> {
        self.inner.refresh().await
    }

    /// Apply a completed drag to the board and persist it in the background.
    pub async fn handle_move(&self, mv: MoveDescriptor) -> MoveOutcome {
        let batch = {
            let mut board = self.inner.board.write().await;
            match reconcile(&board, &mv) {
                Ok(Reconciliation { board: next, batch }) => {
                    *board = next;
                    batch
                }
                Err(e) => {
                    warn!(error = %e, source = ?mv.source, "Rejected move");
                    self.inner
                        .notifier
                        .notify(Notification::error(MOVE_FAILED_MESSAGE));
                    return MoveOutcome::Rejected(e);
                }
            }
        };

        if batch.is_empty() {
            debug!("Move produced no updates");
            return MoveOutcome::Unchanged;
        }

        info!(
            entries = batch.len(),
            moved = %batch[0].id,
            status = %batch[0].status,
            "Applied move, persisting"
        );

        let inner = Arc::clone(&self.inner);
        let pending = batch.clone();
        let handle = tokio::spawn(async move { inner.persist(pending).await });
        MoveOutcome::Persisting { batch, handle }
    }
}

impl Inner {
    async fn refresh(&self) -> Result<usize, GatewayError> {
        let tasks = self.source.fetch(&self.config.filter).await?;
        let board = Board::partition(tasks.iter().map(|task| task.summary()));
        let count = board.len();

        *self.board.write().await = board;
        debug!(tasks = count, "Rebuilt board");
        Ok(count)
    }

    async fn persist(&self, batch: Vec<UpdateEntry>) {
        match self.gateway.bulk_update(batch).await {
            Ok(updated) => {
                info!(updated = updated.len(), "Persisted update batch");
                self.notifier
                    .notify(Notification::success(UPDATE_SUCCEEDED_MESSAGE));

                if self.config.refresh_on_success {
                    if let Err(e) = self.refresh().await {
                        warn!(error = %e, "Refresh after persist failed");
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to persist update batch");
                self.notifier
                    .notify(Notification::error(UPDATE_FAILED_MESSAGE));
            }
        }
    }
}
