use dioxus::prelude::*;

use crate::context::{AppConfig, ThemeHandle};
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the theme handle. The startup configuration
/// is supplied by the launcher as root context.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let theme = use_signal(|| config.initial_theme);
    let store = use_signal(|| config.theme_store.clone());
    let handle = use_context_provider(|| ThemeHandle::new(theme, store));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "portfolio {handle.get().class()}",
            Portfolio {}
        }
    }
}
