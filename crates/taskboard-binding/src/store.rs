//! In-memory task store.
//!
//! Serves as both the task source and the persistence gateway for a board.
//! The CLI loads it from a JSON file; tests use it as the backing store.

use std::collections::HashMap;

use async_trait::async_trait;
use taskboard_core::batch::Placeable;
use taskboard_core::{Board, Task, TaskFilter, TaskId, TaskSummary, UpdateEntry};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::GatewayError;
use crate::gateway::{PersistenceGateway, TaskSource};

/// Tasks indexed by TaskId.
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tasks` as-is.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks.into_iter().map(|t| (t.id.clone(), t)).collect()),
        }
    }

    /// Insert a new task at the bottom of its column.
    ///
    /// The rank is computed among tasks of the same workspace and status:
    /// `1` for an empty column, otherwise the highest rank plus one step.
    pub async fn create_task(&self, mut task: Task) -> Task {
        let mut tasks = self.tasks.write().await;

        let siblings = tasks
            .values()
            .filter(|t| t.workspace_id == task.workspace_id && t.status == task.status)
            .map(Task::summary);
        task.position = Board::partition(siblings)
            .column(task.status)
            .next_position();

        debug!(task_id = %task.id, status = %task.status, position = task.position, "Created task");
        tasks.insert(task.id.clone(), task.clone());
        task
    }

    /// Get a task by id.
    pub async fn get(&self, id: &TaskId) -> Option<Task> {
        self.tasks.read().await.get(id).cloned()
    }

    /// Every task, newest first.
    pub async fn snapshot(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        tasks
    }

    /// Get the number of tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskStore {
    async fn fetch(&self, filter: &TaskFilter) -> Result<Vec<Task>, GatewayError> {
        Ok(self
            .snapshot()
            .await
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect())
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryTaskStore {
    async fn bulk_update(&self, batch: Vec<UpdateEntry>) -> Result<Vec<TaskSummary>, GatewayError> {
        let mut tasks = self.tasks.write().await;

        // All or nothing.
        if let Some(missing) = batch.iter().find(|entry| !tasks.contains_key(&entry.id)) {
            return Err(GatewayError::TaskNotFound(missing.id.to_string()));
        }

        let mut updated = Vec::with_capacity(batch.len());
        for entry in batch {
            if let Some(task) = tasks.get_mut(&entry.id) {
                task.place(entry.status, entry.position);
                updated.push(task.summary());
            }
        }

        debug!(count = updated.len(), "Applied update batch");
        Ok(updated)
    }
}
