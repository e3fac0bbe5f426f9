//! Move reconciler: apply one drag-and-drop move to a board.
//!
//! [`reconcile`] is a pure function. It reads the caller's board, builds a new
//! one that shares every column the move did not touch, and returns the
//! minimal batch of `{id, status, position}` rows the persistence layer needs
//! to end up with the same ordering.

use serde::{Deserialize, Serialize};

use crate::rank::canonical_rank;
use crate::{reindex, Board, Column, CoreError, TaskStatus, UpdateEntry};

/// A slot on the board: a column and a 0-based index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub status: TaskStatus,
    pub index: usize,
}

impl Location {
    pub fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// Result of one completed drag gesture.
///
/// `destination` is `None` when the card was dropped outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub source: Location,
    #[serde(default)]
    pub destination: Option<Location>,
}

impl MoveDescriptor {
    /// A move from `source` to `destination`.
    pub fn new(source: Location, destination: Location) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// A drag that was cancelled; reconciles to nothing.
    pub fn cancelled(source: Location) -> Self {
        Self {
            source,
            destination: None,
        }
    }

    /// True when the move carries no destination.
    pub fn is_inert(&self) -> bool {
        self.destination.is_none()
    }

    /// True when the task lands in a different column.
    pub fn changes_status(&self) -> bool {
        self.destination
            .is_some_and(|destination| destination.status != self.source.status)
    }
}

/// New board plus the rows to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub board: Board,
    pub batch: Vec<UpdateEntry>,
}

impl Reconciliation {
    fn unchanged(board: &Board) -> Self {
        Self {
            board: board.clone(),
            batch: Vec::new(),
        }
    }

    /// True when there is nothing to persist.
    pub fn is_noop(&self) -> bool {
        self.batch.is_empty()
    }
}

/// Apply `mv` to `board`.
///
/// The moved task's entry always leads the batch, even if its rank did not
/// change, followed by the destination column's rank changes and, for moves
/// across columns, the source column's. Every column the move touched holds
/// canonical ranks in the returned board.
///
/// Fails with [`CoreError::TaskNotFoundAtIndex`] when the source slot is empty;
/// the caller's board is never modified.
pub fn reconcile(board: &Board, mv: &MoveDescriptor) -> Result<Reconciliation, CoreError> {
    let Some(destination) = mv.destination else {
        return Ok(Reconciliation::unchanged(board));
    };
    let source = mv.source;

    let source_column = board.column(source.status);
    let mut moved = source_column
        .get(source.index)
        .cloned()
        .ok_or(CoreError::TaskNotFoundAtIndex {
            status: source.status,
            index: source.index,
        })?;

    let mut source_tasks = source_column.tasks().to_vec();
    source_tasks.remove(source.index);
    if mv.changes_status() {
        moved = moved.with_status(destination.status);
    }
    let moved_id = moved.id.clone();

    let (mut destination_tasks, source_rest) = if mv.changes_status() {
        (
            board.column(destination.status).tasks().to_vec(),
            Some(source_tasks),
        )
    } else {
        (source_tasks, None)
    };

    let insert_at = destination.index.min(destination_tasks.len());
    destination_tasks.insert(insert_at, moved);
    let destination_column = Column::from_ordered(destination.status, destination_tasks);

    let mut batch = Vec::with_capacity(destination_column.len() + 1);
    batch.push(UpdateEntry::new(
        moved_id.clone(),
        destination.status,
        canonical_rank(insert_at),
    ));
    batch.extend(reindex(&destination_column, Some(&moved_id)));
    let mut next = board.with_column(canonicalize(destination_column));

    if let Some(rest) = source_rest {
        let shrunk = Column::from_ordered(source.status, rest);
        batch.extend(reindex(&shrunk, None));
        next = next.with_column(canonicalize(shrunk));
    }

    Ok(Reconciliation { board: next, batch })
}

/// Rewrite every rank in the column to its canonical value.
fn canonicalize(column: Column) -> Column {
    let status = column.status();
    let tasks = column
        .into_tasks()
        .into_iter()
        .enumerate()
        .map(|(index, mut task)| {
            task.position = canonical_rank(index);
            task
        })
        .collect();
    Column::from_ordered(status, tasks)
}
