use dioxus::prelude::*;
use folio_core::profile::{Section, PROFILE};
use folio_ui::{Button, ButtonVariant};

use crate::viewport::scroll_to;

/// Full-height intro with the two call-to-action buttons
#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "{PROFILE.name}" }
                p { class: "hero-subtitle", "{PROFILE.title}" }
                p { class: "hero-tagline", "{PROFILE.tagline}" }
                div { class: "hero-buttons",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to(Section::Projects),
                        "View Projects"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| scroll_to(Section::Contact),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
