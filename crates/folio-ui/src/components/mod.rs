//! Reusable UI components
//!
//! All components read colours from the theme's CSS custom properties.

mod button;
mod filter_pills;
mod form_banner;
mod input;
mod skill_bar;

pub use button::*;
pub use filter_pills::*;
pub use form_banner::*;
pub use input::*;
pub use skill_bar::*;
