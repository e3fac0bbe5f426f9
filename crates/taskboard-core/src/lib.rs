//! TaskBoard Core Domain Types
//!
//! This crate contains the pure board model with no dependencies on:
//! - Async runtimes
//! - Persistence or network layers
//! - UI toolkits
//!
//! Everything here is a synchronous transformation over owned values, so the
//! partition/reindex/reconcile pipeline can be tested without a UI harness.

pub mod batch;
pub mod board;
pub mod diff;
pub mod error;
pub mod filter;
pub mod ids;
pub mod rank;
pub mod reconcile;
pub mod status;
pub mod task;

// Re-export commonly used types
pub use batch::{apply_batch, UpdateEntry};
pub use board::{Board, Column};
pub use diff::reindex;
pub use error::CoreError;
pub use filter::TaskFilter;
pub use ids::{MemberId, ProjectId, TaskId, WorkspaceId};
pub use rank::{canonical_rank, RANK_CAP, RANK_STEP};
pub use reconcile::{reconcile, Location, MoveDescriptor, Reconciliation};
pub use status::TaskStatus;
pub use task::{Task, TaskSummary};
