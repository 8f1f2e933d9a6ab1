//! Filter Pills Component
//!
//! Horizontal row of project filter buttons. Exactly one is active.

use dioxus::prelude::*;
use folio_core::catalog::ProjectFilter;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Filters to offer, in display order
    pub filters: Vec<ProjectFilter>,
    /// Currently selected filter
    pub selected: ProjectFilter,
    /// Handler called when a filter is selected
    pub on_select: EventHandler<ProjectFilter>,
}

/// Displays the project filter buttons
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(ProjectFilter::default);
///
/// rsx! {
///     FilterPills {
///         filters: ProjectFilter::all(),
///         selected: selected(),
///         on_select: move |f| selected.set(f)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let selected = props.selected;

    rsx! {
        div {
            class: "filter-buttons",
            role: "radiogroup",
            "aria-label": "Filter projects",
            for filter in props.filters.iter().copied() {
                {
                    let is_selected = selected == filter;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{filter.key()}",
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            r#type: "button",
                            role: "radio",
                            "data-filter": "{filter.key()}",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(filter),
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
