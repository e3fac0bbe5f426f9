//! Task list filters, the scope a board is built for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{MemberId, ProjectId, Task, TaskStatus, WorkspaceId};

/// Narrows a task list down to one board's scope.
///
/// Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub workspace_id: Option<WorkspaceId>,
    pub project_id: Option<ProjectId>,
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<MemberId>,
    pub due_date: Option<NaiveDate>,
    /// Case-insensitive substring of the task name.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Filter matching every task in a workspace.
    pub fn workspace(workspace_id: impl Into<WorkspaceId>) -> Self {
        Self {
            workspace_id: Some(workspace_id.into()),
            ..Self::default()
        }
    }

    /// Builder method to restrict to one project.
    pub fn with_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Builder method to restrict to one assignee.
    pub fn with_assignee(mut self, assignee_id: impl Into<MemberId>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Builder method to search task names.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check whether a task falls inside this filter.
    pub fn matches(&self, task: &Task) -> bool {
        fn accepts<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
            wanted.as_ref().map_or(true, |wanted| wanted == actual)
        }

        accepts(&self.workspace_id, &task.workspace_id)
            && accepts(&self.project_id, &task.project_id)
            && accepts(&self.status, &task.status)
            && accepts(&self.assignee_id, &task.assignee_id)
            && accepts(&self.due_date, &task.due_date)
            && self.search.as_deref().map_or(true, |needle| {
                task.name.to_lowercase().contains(&needle.to_lowercase())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, workspace: &str, project: &str, assignee: &str) -> Task {
        Task::new(
            name,
            workspace,
            project,
            assignee,
            TaskStatus::Todo,
            NaiveDate::from_ymd_opt(2026, 10, 30).unwrap(),
        )
    }

    #[test]
    fn test_default_matches_everything() {
        assert!(TaskFilter::default().matches(&task("x", "w", "p", "m")));
    }

    #[test]
    fn test_scope_fields() {
        let filter = TaskFilter::workspace("w1").with_project("p1");

        assert!(filter.matches(&task("x", "w1", "p1", "m")));
        assert!(!filter.matches(&task("x", "w2", "p1", "m")));
        assert!(!filter.matches(&task("x", "w1", "p2", "m")));

        let filter = TaskFilter::default().with_assignee("alice");
        assert!(filter.matches(&task("x", "w", "p", "alice")));
        assert!(!filter.matches(&task("x", "w", "p", "bob")));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = TaskFilter::default().with_search("LOGIN");

        assert!(filter.matches(&task("Fix login redirect", "w", "p", "m")));
        assert!(!filter.matches(&task("Update footer", "w", "p", "m")));
    }

    #[test]
    fn test_status_and_due_date() {
        let mut filter = TaskFilter::default();
        filter.status = Some(TaskStatus::Done);
        assert!(!filter.matches(&task("x", "w", "p", "m")));

        let mut filter = TaskFilter::default();
        filter.due_date = NaiveDate::from_ymd_opt(2026, 10, 30);
        assert!(filter.matches(&task("x", "w", "p", "m")));
    }
}
