//! Skill Bar Component
//!
//! Skill card with a progress bar. The bar stays empty until `animated` is
//! set, then grows to the skill level through a CSS width transition.

use dioxus::prelude::*;
use folio_core::profile::Skill;

/// Inline style for the progress fill
pub fn progress_style(level: u8, animated: bool) -> String {
    let width = if animated { level.min(100) } else { 0 };
    format!("--skill-level: {}%; width: {}%;", level.min(100), width)
}

#[derive(Clone, PartialEq, Props)]
pub struct SkillCardProps {
    pub skill: Skill,
    /// Whether the card has been seen and the bar should fill
    #[props(default = false)]
    pub animated: bool,
}

#[component]
pub fn SkillCard(props: SkillCardProps) -> Element {
    let skill = props.skill;
    let style = progress_style(skill.level, props.animated);

    rsx! {
        div {
            id: "{skill.anchor()}",
            class: if props.animated { "skill-card animate" } else { "skill-card" },
            div { class: "skill-header",
                span { class: "skill-icon", "{skill.icon}" }
                h3 { class: "skill-name", "{skill.name}" }
            }
            div { class: "skill-category", "{skill.category}" }
            div { class: "skill-level",
                div { class: "skill-progress", style: "{style}" }
            }
            span { class: "skill-percentage", "{skill.level}%" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_empty_until_animated() {
        assert_eq!(progress_style(90, false), "--skill-level: 90%; width: 0%;");
        assert_eq!(progress_style(90, true), "--skill-level: 90%; width: 90%;");
    }

    #[test]
    fn level_is_clamped() {
        assert_eq!(progress_style(150, true), "--skill-level: 100%; width: 100%;");
    }
}
