use dioxus::prelude::*;
use folio_core::profile::PROFILE;

#[component]
pub fn Footer() -> Element {
    let copyright = PROFILE.copyright();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                div { class: "footer-content",
                    p { "{copyright}" }
                    div { class: "social-links",
                        for link in PROFILE.socials.iter() {
                            a {
                                key: "{link.label}",
                                href: "{link.url}",
                                class: "social-link",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
