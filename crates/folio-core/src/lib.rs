//! Folio Core Library
//!
//! UI-independent logic behind the Folio portfolio page.
//!
//! ## Overview
//!
//! The page is a single view with a contact form, a filterable project grid,
//! a theme switch and two viewport observers (nav highlight and skill-bar
//! animation). Everything here is plain state and rules; the Dioxus layer
//! renders it and forwards events.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::contact::{ContactForm, FormField, SubmitOutcome};
//!
//! let mut form = ContactForm::new();
//! form.input(FormField::Name, "Al");
//! form.input(FormField::Email, "a@b.co");
//! form.input(FormField::Message, "this is fine");
//!
//! let outcome = form.submit();
//! assert!(outcome.is_success());
//!
//! if let SubmitOutcome::Success { ticket } = outcome {
//!     // normally run by the ResetTimer after the delay
//!     form.complete_reset(ticket);
//! }
//! assert_eq!(form.value(FormField::Name), "");
//! ```

pub mod catalog;
pub mod contact;
pub mod error;
pub mod nav;
pub mod profile;
pub mod theme;
pub mod viewport;

// Re-exports
pub use catalog::{visible_projects, Project, ProjectCategory, ProjectFilter, PROJECTS};
pub use contact::{
    ContactForm, FieldIndicator, FormField, FormMessage, ResetTimer, SubmitOutcome, SubmitPolicy,
    DEFAULT_RESET_DELAY,
};
pub use error::{FolioError, FolioResult};
pub use nav::MenuState;
pub use profile::{Profile, Section, Skill, SocialLink, PROFILE, SKILLS};
pub use theme::{MemoryThemeStore, RedbThemeStore, Theme, ThemeStore};
pub use viewport::{
    IntersectionEntry, ManualViewport, ObserverOptions, SectionTracker, SkillAnimator,
    Subscription, Subscriptions, Viewport,
};
