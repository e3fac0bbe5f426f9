//! Binding configuration.

use taskboard_core::TaskFilter;

/// Board binding configuration.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Scope of the task list the board is built from.
    pub filter: TaskFilter,

    /// Re-fetch and re-partition once a batch is confirmed persisted.
    pub refresh_on_success: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            filter: TaskFilter::default(),
            refresh_on_success: true,
        }
    }
}

impl BindingConfig {
    /// Builder method to set the board scope.
    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Builder method to toggle refresh after persistence.
    pub fn with_refresh_on_success(mut self, refresh: bool) -> Self {
        self.refresh_on_success = refresh;
        self
    }
}
