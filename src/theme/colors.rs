//! Color constants for both themes.
//!
//! The stylesheet carries the same values as CSS custom properties; these
//! constants cover what is painted outside the webview.

use folio_core::theme::Theme;

// === LIGHT ===
pub const LIGHT_BACKGROUND: (u8, u8, u8, u8) = (0xf8, 0xf9, 0xfb, 0xff);

// === DARK ===
pub const DARK_BACKGROUND: (u8, u8, u8, u8) = (0x0f, 0x17, 0x2a, 0xff);

/// Window background shown before the page paints
pub fn window_background(theme: Theme) -> (u8, u8, u8, u8) {
    match theme {
        Theme::Light => LIGHT_BACKGROUND,
        Theme::Dark => DARK_BACKGROUND,
    }
}
