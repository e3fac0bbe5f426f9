//! CLI configuration.

use std::path::PathBuf;

use taskboard_binding::BindingConfig;
use tracing::Level;

/// CLI configuration.
pub struct Config {
    /// JSON file holding the task list.
    pub tasks_path: PathBuf,

    /// Maximum log level written to stderr.
    pub log_level: Level,

    /// Board binding settings.
    pub binding: BindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_path: PathBuf::from("tasks.json"),
            log_level: Level::INFO,
            binding: BindingConfig::default(),
        }
    }
}
