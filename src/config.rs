//! Widget Configuration
//!
//! Display strings and log level, provided to components via context.

use leptos::prelude::*;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Placeholder shown in the empty input
    pub placeholder: String,
    /// Label of the per-item removal button
    pub remove_label: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            placeholder: "Add an item".to_string(),
            remove_label: "X".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

/// Get the widget config from context, or the defaults when none is provided
pub fn use_widget_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_default()
}
