//! Error types for task sources and persistence gateways.

use thiserror::Error;

/// Errors returned by a [`TaskSource`](crate::TaskSource) or
/// [`PersistenceGateway`](crate::PersistenceGateway).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// A batch named a task the store does not hold.
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// The backing store could not be reached.
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),
}
