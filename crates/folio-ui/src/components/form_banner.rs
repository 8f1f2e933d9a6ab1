//! Form Banner Component
//!
//! Form-level result message shown under the submit button.

use dioxus::prelude::*;
use folio_core::contact::FormMessage;

/// Returns the CSS class for a banner
pub fn banner_class(message: FormMessage) -> &'static str {
    if message.is_success() {
        "form-message success"
    } else {
        "form-message error"
    }
}

/// Displays the submit outcome; renders nothing without a message
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormBanner { message: form.read().message() }
/// }
/// ```
#[component]
pub fn FormBanner(message: Option<FormMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: banner_class(message),
            role: "status",
            "aria-live": "polite",
            "{message.text()}"
        }
    }
}
