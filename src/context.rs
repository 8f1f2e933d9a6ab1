//! Startup configuration and theme context.
//!
//! ## Usage
//!
//! ```ignore
//! // anywhere below App
//! let config = use_config();
//! let mut theme = use_theme();
//! theme.toggle();
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::contact::SubmitPolicy;
use folio_core::theme::{Theme, ThemeStore};

/// Everything resolved from the command line before the window opens.
#[derive(Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub initial_theme: Theme,
    pub reset_delay: Duration,
    pub submit_policy: SubmitPolicy,
    pub theme_store: Arc<dyn ThemeStore>,
}

/// Reactive theme plus the store it is persisted to.
///
/// All theme changes go through [`ThemeHandle::set`].
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    theme: Signal<Theme>,
    store: Signal<Arc<dyn ThemeStore>>,
}

impl ThemeHandle {
    pub fn new(theme: Signal<Theme>, store: Signal<Arc<dyn ThemeStore>>) -> Self {
        Self { theme, store }
    }

    pub fn get(&self) -> Theme {
        *self.theme.read()
    }

    /// Switch theme and persist it. A failed save is logged; the switch
    /// still happens.
    pub fn set(&mut self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = self.store.read().save(theme) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        tracing::info!(%theme, "theme changed");
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggled();
        self.set(next);
    }
}

/// Hook to read the startup configuration.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Hook to access the theme handle.
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
