//! The portfolio page.
//!
//! Lays out every section and owns the two viewport observations: one
//! highlights the nav link of the section in view, the other starts the
//! skill-bar fill. Both are released when the page is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::profile::{Section, SKILLS};
use folio_core::viewport::{
    IntersectionEntry, SectionTracker, SkillAnimator, Subscriptions, Viewport, SECTION_OBSERVER,
    SKILL_OBSERVER,
};

use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, NavBar, ProjectsSection, SkillsSection,
};
use crate::viewport::ScriptViewport;

#[component]
pub fn Portfolio() -> Element {
    let active_section: Signal<Option<Section>> = use_signal(|| None);
    let animated = use_signal(SkillAnimator::new);
    let subscriptions = use_hook(|| Rc::new(RefCell::new(Subscriptions::new())));

    // Observe once the sections are mounted
    use_effect({
        let subscriptions = subscriptions.clone();
        move || {
            let mut subs = subscriptions.borrow_mut();
            if !subs.is_empty() {
                return;
            }
            let viewport = ScriptViewport;

            let mut tracker = SectionTracker::new();
            let mut active_section = active_section;
            subs.push(viewport.observe(
                Section::ALL.iter().map(|s| s.anchor().to_string()).collect(),
                SECTION_OBSERVER,
                Box::new(move |entry: IntersectionEntry| {
                    if let Some(next) = tracker.update(&entry) {
                        active_section.set(Some(next));
                    }
                }),
            ));

            let mut animated = animated;
            subs.push(viewport.observe(
                SKILLS.iter().map(|s| s.anchor()).collect(),
                SKILL_OBSERVER,
                Box::new(move |entry: IntersectionEntry| {
                    let fresh = entry.is_intersecting
                        && !animated.peek().is_animated(&entry.target);
                    if fresh {
                        animated.write().update(&entry);
                    }
                }),
            ));
        }
    });

    use_drop({
        let subscriptions = subscriptions.clone();
        move || subscriptions.borrow_mut().clear()
    });

    rsx! {
        NavBar { active: active_section() }
        main {
            HeroSection {}
            AboutSection {}
            SkillsSection { animated: animated }
            ProjectsSection {}
            ContactSection {}
        }
        Footer {}
    }
}
