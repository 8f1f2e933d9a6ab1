//! Skills grid. Bars fill once their card scrolls into view.

use dioxus::prelude::*;
use folio_core::profile::{Section, SKILLS};
use folio_core::viewport::SkillAnimator;
use folio_ui::SkillCard;

#[derive(Props, Clone, PartialEq)]
pub struct SkillsSectionProps {
    /// Animation state fed by the skill-bar observer
    pub animated: Signal<SkillAnimator>,
}

#[component]
pub fn SkillsSection(props: SkillsSectionProps) -> Element {
    let animated = props.animated.read();

    rsx! {
        section { id: Section::Skills.anchor(), class: "section section-alt",
            div { class: "container",
                h2 { "Skills & Technologies" }
                div { class: "skills-grid",
                    for skill in SKILLS.iter().copied() {
                        SkillCard {
                            key: "{skill.name}",
                            skill: skill,
                            animated: animated.is_animated(&skill.anchor()),
                        }
                    }
                }
            }
        }
    }
}
