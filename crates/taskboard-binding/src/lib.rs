//! TaskBoard binding layer.
//!
//! Connects the pure reconciler in `taskboard-core` to the outside world:
//! - [`TaskSource`] supplies the task list a board is partitioned from
//! - [`PersistenceGateway`] receives one update batch per move
//! - [`Notifier`] surfaces success and failure to the user
//!
//! [`BoardBinding`] applies every move to its board immediately and persists
//! in the background, so the UI never waits on the round-trip.

pub mod binding;
pub mod config;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod store;

pub use binding::{BoardBinding, MoveOutcome};
pub use config::BindingConfig;
pub use error::GatewayError;
pub use gateway::{PersistenceGateway, TaskSource};
pub use notify::{ChannelNotifier, Notification, NotificationLevel, Notifier, TracingNotifier};
pub use store::InMemoryTaskStore;
