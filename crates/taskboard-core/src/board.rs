//! Columns, boards and the column partitioner.

use serde::Serialize;
use std::sync::Arc;

use crate::rank::{FIRST_NEW_RANK, RANK_STEP};
use crate::{TaskId, TaskStatus, TaskSummary};

/// Ordered tasks sharing one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<TaskSummary>,
}

impl Column {
    /// Create an empty column.
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Build a column from tasks already in display order.
    pub(crate) fn from_ordered(status: TaskStatus, tasks: Vec<TaskSummary>) -> Self {
        Self { status, tasks }
    }

    /// Status shared by every task in the column.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[TaskSummary] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a display index.
    pub fn get(&self, index: usize) -> Option<&TaskSummary> {
        self.tasks.get(index)
    }

    /// Display index of a task.
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == id)
    }

    /// Rank for a task appended to this column at creation time.
    ///
    /// `1` for an empty column, otherwise the highest rank plus one step.
    pub fn next_position(&self) -> i64 {
        self.tasks
            .iter()
            .map(|task| task.position)
            .max()
            .map_or(FIRST_NEW_RANK, |highest| highest.saturating_add(RANK_STEP))
    }

    /// True when ranks never decrease along the column.
    pub fn is_sorted(&self) -> bool {
        self.tasks.windows(2).all(|w| w[0].position <= w[1].position)
    }

    pub(crate) fn into_tasks(self) -> Vec<TaskSummary> {
        self.tasks
    }
}

/// Every task on the board, split into one column per status.
///
/// Columns are reference counted: boards derived from one another share the
/// columns a move did not touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Arc<Column>; TaskStatus::COUNT],
}

impl Board {
    /// A board with every column present and empty.
    pub fn empty() -> Self {
        Self {
            columns: TaskStatus::ALL.map(|status| Arc::new(Column::new(status))),
        }
    }

    /// Partition a flat task list into sorted columns.
    ///
    /// Tasks sharing a rank keep the relative order they had in `tasks`.
    pub fn partition<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = TaskSummary>,
    {
        let mut buckets: [Vec<TaskSummary>; TaskStatus::COUNT] = Default::default();
        for task in tasks {
            buckets[slot(task.status)].push(task);
        }

        let columns = TaskStatus::ALL.map(|status| {
            let mut tasks = std::mem::take(&mut buckets[slot(status)]);
            tasks.sort_by_key(|task| task.position);
            Arc::new(Column::from_ordered(status, tasks))
        });

        Self { columns }
    }

    /// Column for a status. Always present.
    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[slot(status)]
    }

    /// Columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().map(|column| column.as_ref())
    }

    /// Every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &TaskSummary> {
        self.columns().flat_map(|column| column.tasks().iter())
    }

    /// Total number of tasks.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.find(id).is_some()
    }

    /// Column and display index of a task.
    pub fn find(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns()
            .find_map(|column| column.position_of(id).map(|index| (column.status(), index)))
    }

    /// True when both boards hold the very same allocation for `status`.
    pub fn shares_column(&self, other: &Board, status: TaskStatus) -> bool {
        Arc::ptr_eq(&self.columns[slot(status)], &other.columns[slot(status)])
    }

    /// Copy of this board with one column swapped out.
    pub(crate) fn with_column(&self, column: Column) -> Self {
        let mut columns = self.columns.clone();
        let index = slot(column.status());
        columns[index] = Arc::new(column);
        Self { columns }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn slot(status: TaskStatus) -> usize {
    status as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn summary(id: &str, status: TaskStatus, position: i64) -> TaskSummary {
        TaskSummary::new(id, status, position)
    }

    #[test]
    fn test_partition_empty_has_every_column() {
        let board = Board::partition(Vec::<TaskSummary>::new());

        assert!(board.is_empty());
        let statuses: Vec<_> = board.columns().map(Column::status).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert!(board.columns().all(Column::is_empty));
    }

    #[test]
    fn test_partition_places_each_task_once() {
        let tasks = vec![
            summary("a", TaskStatus::Todo, 2000),
            summary("b", TaskStatus::Done, 1000),
            summary("c", TaskStatus::Todo, 1000),
            summary("d", TaskStatus::Backlog, 5),
            summary("e", TaskStatus::InReview, 7),
        ];
        let board = Board::partition(tasks.clone());

        assert_eq!(board.len(), tasks.len());
        let ids: HashSet<_> = board.tasks().map(|t| t.id.clone()).collect();
        let expected: HashSet<_> = tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, expected);

        for column in board.columns() {
            assert!(column.tasks().iter().all(|t| t.status == column.status()));
        }
    }

    #[test]
    fn test_partition_sorts_by_position() {
        let board = Board::partition(vec![
            summary("late", TaskStatus::Todo, 9000),
            summary("early", TaskStatus::Todo, 10),
            summary("mid", TaskStatus::Todo, 4000),
        ]);

        let order: Vec<_> = board
            .column(TaskStatus::Todo)
            .tasks()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(order, vec!["early", "mid", "late"]);
        assert!(board.columns().all(Column::is_sorted));
    }

    #[test]
    fn test_partition_ties_keep_input_order() {
        let board = Board::partition(vec![
            summary("second", TaskStatus::Done, 1000),
            summary("first", TaskStatus::Done, 500),
            summary("third", TaskStatus::Done, 1000),
        ]);

        let order: Vec<_> = board
            .column(TaskStatus::Done)
            .tasks()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_find_and_contains() {
        let board = Board::partition(vec![
            summary("a", TaskStatus::InProgress, 1000),
            summary("b", TaskStatus::InProgress, 2000),
        ]);

        assert_eq!(board.find(&"b".into()), Some((TaskStatus::InProgress, 1)));
        assert!(board.contains(&"a".into()));
        assert!(!board.contains(&"zzz".into()));
    }

    #[test]
    fn test_next_position() {
        let board = Board::partition(vec![
            summary("a", TaskStatus::Todo, 1000),
            summary("b", TaskStatus::Todo, 4500),
        ]);

        assert_eq!(board.column(TaskStatus::Todo).next_position(), 5500);
        assert_eq!(board.column(TaskStatus::Done).next_position(), 1);
    }

    #[test]
    fn test_with_column_shares_untouched_columns() {
        let board = Board::partition(vec![summary("a", TaskStatus::Todo, 1000)]);
        let next = board.with_column(Column::new(TaskStatus::Todo));

        assert!(!next.shares_column(&board, TaskStatus::Todo));
        assert!(next.shares_column(&board, TaskStatus::Done));
        assert!(next.column(TaskStatus::Todo).is_empty());
    }

    #[test]
    fn test_with_column_replaces_the_matching_slot() {
        let board = Board::partition(vec![
            summary("a", TaskStatus::Todo, 1000),
            summary("b", TaskStatus::Done, 1000),
        ]);
        let done = Column::from_ordered(
            TaskStatus::Done,
            vec![
                summary("c", TaskStatus::Done, 1000),
                summary("b", TaskStatus::Done, 2000),
            ],
        );
        let next = board.with_column(done);

        let column = next.column(TaskStatus::Done);
        assert_eq!(column.get(0).map(|t| t.id.as_str()), Some("c"));
        assert_eq!(column.get(1).map(|t| t.position), Some(2000));
        assert!(column.get(2).is_none());
        assert!(next.shares_column(&board, TaskStatus::Todo));
    }
}
