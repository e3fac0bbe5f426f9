//! Update entries and applying them to stored tasks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Task, TaskId, TaskStatus, TaskSummary};

/// One row of a persistence batch: where a task now lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub id: TaskId,
    pub status: TaskStatus,
    pub position: i64,
}

impl UpdateEntry {
    /// Create a new UpdateEntry.
    pub fn new(id: impl Into<TaskId>, status: TaskStatus, position: i64) -> Self {
        Self {
            id: id.into(),
            status,
            position,
        }
    }
}

/// Records a batch can be applied to.
pub trait Placeable {
    fn task_id(&self) -> &TaskId;

    /// Move the record to `status` at rank `position`.
    fn place(&mut self, status: TaskStatus, position: i64);
}

impl Placeable for TaskSummary {
    fn task_id(&self) -> &TaskId {
        &self.id
    }

    fn place(&mut self, status: TaskStatus, position: i64) {
        self.status = status;
        self.position = position;
    }
}

impl Placeable for Task {
    fn task_id(&self) -> &TaskId {
        &self.id
    }

    fn place(&mut self, status: TaskStatus, position: i64) {
        self.status = status;
        self.position = position;
    }
}

/// Overwrite status and rank of every record named in `batch`.
///
/// Entries are applied in order, so the last entry for an id wins. Returns
/// how many entries matched a record; unknown ids are skipped.
pub fn apply_batch<T: Placeable>(records: &mut [T], batch: &[UpdateEntry]) -> usize {
    let index: HashMap<TaskId, usize> = records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.task_id().clone(), i))
        .collect();

    let mut applied = 0;
    for entry in batch {
        if let Some(&i) = index.get(&entry.id) {
            records[i].place(entry.status, entry.position);
            applied += 1;
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_batch_updates_named_records() {
        let mut records = vec![
            TaskSummary::new("a", TaskStatus::Todo, 1000),
            TaskSummary::new("b", TaskStatus::Todo, 2000),
        ];
        let batch = vec![
            UpdateEntry::new("a", TaskStatus::Done, 1000),
            UpdateEntry::new("ghost", TaskStatus::Done, 2000),
        ];

        assert_eq!(apply_batch(&mut records, &batch), 1);
        assert_eq!(records[0], TaskSummary::new("a", TaskStatus::Done, 1000));
        assert_eq!(records[1], TaskSummary::new("b", TaskStatus::Todo, 2000));
    }

    #[test]
    fn test_apply_batch_last_entry_wins() {
        let mut records = vec![TaskSummary::new("a", TaskStatus::Todo, 1000)];
        let batch = vec![
            UpdateEntry::new("a", TaskStatus::InProgress, 3000),
            UpdateEntry::new("a", TaskStatus::InReview, 2000),
        ];

        assert_eq!(apply_batch(&mut records, &batch), 2);
        assert_eq!(records[0], TaskSummary::new("a", TaskStatus::InReview, 2000));
    }

    #[test]
    fn test_update_entry_wire_shape() {
        let entry = UpdateEntry::new("t-1", TaskStatus::InProgress, 4000);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "t-1", "status": "IN_PROGRESS", "position": 4000 })
        );
    }
}
