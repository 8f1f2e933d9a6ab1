//! Viewport intersection observation.
//!
//! Observation is a capability: [`Viewport::observe`] registers a callback
//! for a set of element ids and returns a [`Subscription`] that releases
//! the registration when disposed or dropped. Two consumers exist:
//!
//! - [`SectionTracker`] decides which nav link is highlighted
//! - [`SkillAnimator`] records which skill bars have started animating
//!
//! They own disjoint state and can be driven by separate observers.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::profile::Section;

/// One intersection change reported by the viewport
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Element id of the observed target
    pub target: String,
    pub is_intersecting: bool,
    #[serde(default)]
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn entering(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: true,
            ratio: 1.0,
        }
    }

    pub fn leaving(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Observer tuning, mirrored onto the host IntersectionObserver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible
    pub threshold: f64,
    /// CSS margin applied to the root box
    pub root_margin: &'static str,
}

/// Sections count as current once 30% is visible below the fixed nav bar
pub const SECTION_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.3,
    root_margin: "-80px 0px 0px 0px",
};

pub const SKILL_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.5,
    root_margin: "0px",
};

pub type IntersectionCallback = Box<dyn FnMut(IntersectionEntry)>;

/// Source of intersection notifications
pub trait Viewport {
    fn observe(
        &self,
        targets: Vec<String>,
        options: ObserverOptions,
        callback: IntersectionCallback,
    ) -> Subscription;
}

/// Handle to a live observation; releases it exactly once.
#[must_use = "dropping a Subscription stops the observation"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the observation now.
    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Subscriptions released together on teardown
#[derive(Debug, Default)]
pub struct Subscriptions {
    inner: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.inner.push(subscription);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Release every held subscription.
    pub fn clear(&mut self) {
        for sub in self.inner.drain(..) {
            sub.dispose();
        }
    }
}

/// Tracks which section the nav bar should highlight
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    /// Currently visible sections, most recently entered last
    visible: Vec<Section>,
    active: Option<Section>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// Apply an entry; returns the new active section if it changed.
    ///
    /// Entries for unknown targets are ignored. When the last visible
    /// section leaves, the previous highlight is kept.
    pub fn update(&mut self, entry: &IntersectionEntry) -> Option<Section> {
        let section = Section::from_anchor(&entry.target)?;

        self.visible.retain(|s| *s != section);
        if entry.is_intersecting {
            self.visible.push(section);
        }

        let next = self.visible.last().copied().or(self.active);
        if next != self.active {
            self.active = next;
            tracing::debug!(?next, "active section changed");
            next
        } else {
            None
        }
    }
}

/// One-shot animation state of the skill bars
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillAnimator {
    animated: HashSet<String>,
}

impl SkillAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an entry; returns true if this target starts animating now.
    pub fn update(&mut self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && self.animated.insert(entry.target.clone())
    }

    pub fn is_animated(&self, target: &str) -> bool {
        self.animated.contains(target)
    }
}

struct Registration {
    id: u64,
    targets: Vec<String>,
    options: ObserverOptions,
    callback: Rc<RefCell<IntersectionCallback>>,
}

#[derive(Default)]
struct ManualState {
    next_id: u64,
    registrations: Vec<Registration>,
}

/// Deterministic viewport driven by hand; entries are pushed with `emit`.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<ManualState>>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `entry` to every live observation watching its target.
    pub fn emit(&self, entry: IntersectionEntry) {
        let callbacks: Vec<_> = self
            .state
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.targets.iter().any(|t| *t == entry.target))
            .map(|r| r.callback.clone())
            .collect();

        for callback in callbacks {
            let mut callback = callback.borrow_mut();
            (*callback)(entry.clone());
        }
    }

    pub fn live_subscriptions(&self) -> usize {
        self.state.borrow().registrations.len()
    }

    /// Options of every live observation, in registration order
    pub fn live_options(&self) -> Vec<ObserverOptions> {
        self.state
            .borrow()
            .registrations
            .iter()
            .map(|r| r.options)
            .collect()
    }
}

impl Viewport for ManualViewport {
    fn observe(
        &self,
        targets: Vec<String>,
        options: ObserverOptions,
        callback: IntersectionCallback,
    ) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.registrations.push(Registration {
                id,
                targets,
                options,
                callback: Rc::new(RefCell::new(callback)),
            });
            id
        };

        let state = Rc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().registrations.retain(|r| r.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_targets() -> Vec<String> {
        Section::ALL.iter().map(|s| s.anchor().to_string()).collect()
    }

    #[test]
    fn tracker_follows_latest_entered_section() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.active(), None);

        assert_eq!(
            tracker.update(&IntersectionEntry::entering("home")),
            Some(Section::Home)
        );
        assert_eq!(
            tracker.update(&IntersectionEntry::entering("about")),
            Some(Section::About)
        );
        // leaving the newest falls back to the one still visible
        assert_eq!(
            tracker.update(&IntersectionEntry::leaving("about")),
            Some(Section::Home)
        );
        // nothing visible: highlight stays
        assert_eq!(tracker.update(&IntersectionEntry::leaving("home")), None);
        assert_eq!(tracker.active(), Some(Section::Home));
    }

    #[test]
    fn tracker_ignores_unknown_targets() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.update(&IntersectionEntry::entering("blog")), None);
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn skill_animation_is_one_shot() {
        let mut skills = SkillAnimator::new();
        assert!(skills.update(&IntersectionEntry::entering("skill-react")));
        assert!(!skills.update(&IntersectionEntry::entering("skill-react")));
        assert!(!skills.update(&IntersectionEntry::leaving("skill-react")));
        assert!(skills.is_animated("skill-react"));
        assert!(!skills.update(&IntersectionEntry::leaving("skill-css3")));
        assert!(!skills.is_animated("skill-css3"));
    }

    #[test]
    fn manual_viewport_routes_by_target() {
        let viewport = ManualViewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _sub = viewport.observe(
            vec!["about".into()],
            SECTION_OBSERVER,
            Box::new(move |e: IntersectionEntry| sink.borrow_mut().push(e.target)),
        );

        viewport.emit(IntersectionEntry::entering("about"));
        viewport.emit(IntersectionEntry::entering("skills"));
        assert_eq!(*seen.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn dispose_releases_registration() {
        let viewport = ManualViewport::new();
        let hits = Rc::new(RefCell::new(0));

        let counter = hits.clone();
        let sub = viewport.observe(
            section_targets(),
            SECTION_OBSERVER,
            Box::new(move |_: IntersectionEntry| *counter.borrow_mut() += 1),
        );
        assert_eq!(viewport.live_subscriptions(), 1);

        viewport.emit(IntersectionEntry::entering("home"));
        sub.dispose();
        viewport.emit(IntersectionEntry::entering("home"));

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(viewport.live_subscriptions(), 0);
    }

    #[test]
    fn subscriptions_clear_releases_all() {
        let viewport = ManualViewport::new();
        let mut subs = Subscriptions::new();
        subs.push(viewport.observe(
            section_targets(),
            SECTION_OBSERVER,
            Box::new(|_: IntersectionEntry| {}),
        ));
        subs.push(viewport.observe(
            vec!["skill-react".into()],
            SKILL_OBSERVER,
            Box::new(|_: IntersectionEntry| {}),
        ));
        assert_eq!(viewport.live_subscriptions(), 2);
        assert_eq!(viewport.live_options(), vec![SECTION_OBSERVER, SKILL_OBSERVER]);

        subs.clear();
        assert!(subs.is_empty());
        assert_eq!(viewport.live_subscriptions(), 0);
    }

    #[test]
    fn dropping_subscriptions_releases_all() {
        let viewport = ManualViewport::new();
        {
            let mut subs = Subscriptions::new();
            subs.push(viewport.observe(
                section_targets(),
                SECTION_OBSERVER,
                Box::new(|_: IntersectionEntry| {}),
            ));
            assert_eq!(viewport.live_subscriptions(), 1);
        }
        assert_eq!(viewport.live_subscriptions(), 0);
    }

    #[test]
    fn observers_do_not_contend() {
        let viewport = ManualViewport::new();
        let tracker = Rc::new(RefCell::new(SectionTracker::new()));
        let skills = Rc::new(RefCell::new(SkillAnimator::new()));

        let t = tracker.clone();
        let _nav = viewport.observe(
            section_targets(),
            SECTION_OBSERVER,
            Box::new(move |e: IntersectionEntry| {
                t.borrow_mut().update(&e);
            }),
        );
        let s = skills.clone();
        let _bars = viewport.observe(
            vec!["skill-react".into()],
            SKILL_OBSERVER,
            Box::new(move |e: IntersectionEntry| {
                s.borrow_mut().update(&e);
            }),
        );

        viewport.emit(IntersectionEntry::entering("skills"));
        viewport.emit(IntersectionEntry::entering("skill-react"));

        assert_eq!(tracker.borrow().active(), Some(Section::Skills));
        assert!(skills.borrow().is_animated("skill-react"));
        assert!(!skills.borrow().is_animated("skills"));
    }
}
