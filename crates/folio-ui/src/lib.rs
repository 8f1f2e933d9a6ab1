//! Folio UI Components
//!
//! Dioxus components shared by the portfolio page.
//!
//! ## Design Notes
//!
//! Components are stateless: they take values and event handlers as props
//! and leave state to `folio-core` types held by the page. Colours and
//! spacing come from CSS custom properties defined by the app's global
//! stylesheet, so every component follows the active theme.

pub mod components;

pub use components::*;
