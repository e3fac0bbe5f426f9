//! Task records.

use crate::{MemberId, ProjectId, TaskId, TaskStatus, WorkspaceId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The slice of a task the board cares about: identity, column and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Unique task identifier.
    pub id: TaskId,

    /// Column the task sits in.
    pub status: TaskStatus,

    /// Sparse rank within the column. Lower sorts first.
    pub position: i64,
}

impl TaskSummary {
    /// Create a new TaskSummary.
    pub fn new(id: impl Into<TaskId>, status: TaskStatus, position: i64) -> Self {
        Self {
            id: id.into(),
            status,
            position,
        }
    }

    /// Copy of this summary placed in another column.
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// A task as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,

    /// Display name.
    pub name: String,

    /// Owning workspace.
    pub workspace_id: WorkspaceId,

    /// Owning project.
    pub project_id: ProjectId,

    /// Member the task is assigned to.
    pub assignee_id: MemberId,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Due date.
    pub due_date: NaiveDate,

    /// When the task was created.
    pub created_at: DateTime<Utc>,

    /// Current column.
    pub status: TaskStatus,

    /// Rank within the column.
    pub position: i64,
}

impl Task {
    /// Create a new Task with a generated id.
    ///
    /// The position starts at zero; stores assign the real rank on insert.
    pub fn new(
        name: impl Into<String>,
        workspace_id: impl Into<WorkspaceId>,
        project_id: impl Into<ProjectId>,
        assignee_id: impl Into<MemberId>,
        status: TaskStatus,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: TaskId::generate(),
            name: name.into(),
            workspace_id: workspace_id.into(),
            project_id: project_id.into(),
            assignee_id: assignee_id.into(),
            description: None,
            due_date,
            created_at: Utc::now(),
            status,
            position: 0,
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the rank.
    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Project onto the fields the board needs.
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            id: self.id.clone(),
            status: self.status,
            position: self.position,
        }
    }
}
