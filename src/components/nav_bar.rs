//! Navigation Bar Component
//!
//! Fixed top bar with the owner's name, one link per section, the theme
//! switch and (on narrow screens) the hamburger toggle.

use dioxus::prelude::*;
use folio_core::nav::{link_class, MenuState};
use folio_core::profile::{Section, PROFILE};
use folio_ui::IconButton;

use crate::context::use_theme;
use crate::viewport::scroll_to;

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    /// Section currently highlighted by the viewport observer
    pub active: Option<Section>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut menu = use_signal(MenuState::default);
    let mut theme = use_theme();
    let current_theme = theme.get();

    rsx! {
        nav { id: "navbar",
            div { class: "nav-brand",
                span { "{PROFILE.name}" }
            }

            ul { class: menu.read().menu_class(),
                for section in Section::ALL {
                    li { key: "{section.anchor()}",
                        a {
                            href: "#{section.anchor()}",
                            class: link_class(section, props.active),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                scroll_to(section);
                                menu.write().close();
                            },
                            "{section.nav_label()}"
                        }
                    }
                }
            }

            div { class: "nav-actions",
                IconButton {
                    onclick: move |_| theme.toggle(),
                    aria_label: format!("Switch to {} theme", current_theme.toggled()),
                    class: "theme-toggle".to_string(),
                    "{current_theme.toggle_icon()}"
                }

                button {
                    class: menu.read().toggle_class(),
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if menu.read().is_open() { "true" } else { "false" },
                    onclick: move |_| menu.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
