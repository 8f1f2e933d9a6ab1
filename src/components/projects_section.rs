//! Projects grid with category filter.

use dioxus::prelude::*;
use folio_core::catalog::{visible_projects, Project, ProjectFilter};
use folio_core::profile::Section;
use folio_ui::FilterPills;

#[component]
pub fn ProjectsSection() -> Element {
    let mut filter = use_signal(ProjectFilter::default);

    let on_select = move |next: ProjectFilter| {
        tracing::debug!(%next, "project filter selected");
        filter.set(next);
    };

    rsx! {
        section { id: Section::Projects.anchor(), class: "section",
            div { class: "container",
                h2 { "Featured Projects" }
                FilterPills {
                    filters: ProjectFilter::all(),
                    selected: filter(),
                    on_select: on_select,
                }
                div { class: "projects-grid",
                    for project in visible_projects(filter()) {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let class = if project.featured {
        "project-card featured"
    } else {
        "project-card"
    };

    rsx! {
        div { class: class, "data-category": project.category.key(),
            div { class: "project-image",
                img { src: project.image_url, alt: project.title }
                div { class: "project-overlay",
                    div { class: "project-links",
                        a { href: "#", class: "project-link",
                            span { "\u{1F517}" }
                            " Live Demo"
                        }
                        a { href: "#", class: "project-link",
                            span { "\u{1F4BB}" }
                            " Code"
                        }
                    }
                }
            }
            div { class: "project-content",
                div { class: "project-header",
                    h3 { class: "project-title", "{project.title}" }
                    span { class: "project-category", "{project.category.label()}" }
                }
                p { class: "project-description", "{project.description}" }
                div { class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "project-tag", "{tag}" }
                    }
                }
            }
        }
    }
}
