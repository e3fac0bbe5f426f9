//! Seams to the external task source and persistence layer.

use async_trait::async_trait;
use taskboard_core::{Task, TaskFilter, TaskSummary, UpdateEntry};

use crate::error::GatewayError;

/// Pull-based supplier of the task list for one board scope.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetch every task matching `filter`.
    async fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>, GatewayError>;
}

/// Receiver of update batches.
///
/// Implementations should apply a batch as a unit. Callers neither inspect
/// partial failures nor retry.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persist a batch, returning the updated records.
    async fn bulk_update(&self, batch: Vec<UpdateEntry>) -> Result<Vec<TaskSummary>, GatewayError>;
}
