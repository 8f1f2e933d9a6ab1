use dioxus::prelude::*;
use folio_core::profile::{Section, PROFILE};

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: Section::About.anchor(), class: "section",
            div { class: "container",
                h2 { "About Me" }
                div { class: "about-grid",
                    div { class: "about-text",
                        p { "{PROFILE.about}" }
                        div { class: "about-details",
                            div { class: "detail-item",
                                span { class: "detail-icon", "\u{1F4CD}" }
                                span { "{PROFILE.location}" }
                            }
                            div { class: "detail-item",
                                span { class: "detail-icon", "\u{2709}\u{FE0F}" }
                                a { href: "{PROFILE.mailto()}", "{PROFILE.email}" }
                            }
                            div { class: "detail-item",
                                span { class: "detail-icon", "\u{1F4F1}" }
                                span { "{PROFILE.phone}" }
                            }
                        }
                    }
                    div { class: "about-availability",
                        h3 { "Currently Available For:" }
                        div { class: "availability-tags",
                            for tag in PROFILE.availability.iter() {
                                span { key: "{tag}", class: "tag tag-available", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
