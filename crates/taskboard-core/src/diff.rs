//! Diff builder: canonical ranks for a column and the entries that change.

use crate::rank::canonical_rank;
use crate::{Column, TaskId, UpdateEntry};

/// Entries for every task in `column` whose stored rank is not canonical.
///
/// Walks the column in display order; index `i` should hold
/// [`canonical_rank`]`(i)`. The task named by `exclude` is skipped; callers
/// emit that one themselves.
pub fn reindex(column: &Column, exclude: Option<&TaskId>) -> Vec<UpdateEntry> {
    column
        .tasks()
        .iter()
        .enumerate()
        .filter(|(_, task)| Some(&task.id) != exclude)
        .filter_map(|(index, task)| {
            let rank = canonical_rank(index);
            (task.position != rank)
                .then(|| UpdateEntry::new(task.id.clone(), column.status(), rank))
        })
        .collect()
}
