//! Input Field Components
//!
//! Text inputs and textareas bound to a contact form field. Each one renders
//! its own inline feedback from the field's indicator:
//! - no indicator: plain field
//! - success: accent border and a check mark
//! - error: danger border and the error text below the field

use dioxus::prelude::*;
use folio_core::contact::{FieldIndicator, FormField};

/// Properties for the FieldInput component
#[derive(Clone, PartialEq, Props)]
pub struct FieldInputProps {
    /// Which form field this input edits
    pub field: FormField,
    /// Current input value
    pub value: String,
    /// Inline indicator to show
    #[props(default)]
    pub indicator: Option<FieldIndicator>,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Span both grid columns
    #[props(default = false)]
    pub full_width: bool,
}

/// Single-line input with inline feedback
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldInput {
///         field: FormField::Email,
///         input_type: "email".to_string(),
///         value: form.read().value(FormField::Email).to_string(),
///         indicator: form.read().indicator(FormField::Email),
///         oninput: move |v| form.write().input(FormField::Email, v),
///     }
/// }
/// ```
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let id = props.field.id();
    let group_class = group_class(props.indicator, props.full_width);

    rsx! {
        div { class: "{group_class}",
            FieldLabel { field: props.field }
            input {
                id: "{id}",
                name: "{id}",
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                required: props.field.is_required(),
                "aria-invalid": if props.indicator.is_some_and(|i| i.is_error()) { "true" } else { "false" },
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldFeedback { indicator: props.indicator }
        }
    }
}

/// Properties for the FieldTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct FieldTextAreaProps {
    pub field: FormField,
    pub value: String,
    #[props(default)]
    pub indicator: Option<FieldIndicator>,
    pub oninput: EventHandler<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
}

/// Multi-line input with inline feedback, always full width
#[component]
pub fn FieldTextArea(props: FieldTextAreaProps) -> Element {
    let id = props.field.id();
    let group_class = group_class(props.indicator, true);

    rsx! {
        div { class: "{group_class}",
            FieldLabel { field: props.field }
            textarea {
                id: "{id}",
                name: "{id}",
                class: "form-input",
                rows: "{props.rows}",
                required: props.field.is_required(),
                "aria-invalid": if props.indicator.is_some_and(|i| i.is_error()) { "true" } else { "false" },
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            FieldFeedback { indicator: props.indicator }
        }
    }
}

#[component]
fn FieldLabel(field: FormField) -> Element {
    let marker = if field.is_required() { " *" } else { "" };
    rsx! {
        label { r#for: "{field.id()}", "{field.label()}{marker}" }
    }
}

/// Inline message under a field; renders nothing without an indicator
#[component]
pub fn FieldFeedback(indicator: Option<FieldIndicator>) -> Element {
    match indicator {
        Some(FieldIndicator::Error(err)) => rsx! {
            span { class: "field-message error-message", role: "alert", "{err}" }
        },
        Some(FieldIndicator::Success) => rsx! {
            span { class: "field-message success-message", "aria-hidden": "true", "\u{2713}" }
        },
        None => rsx! {},
    }
}

/// Wrapper class for a form group carrying `indicator`
pub fn group_class(indicator: Option<FieldIndicator>, full_width: bool) -> String {
    let mut class = String::from("form-group");
    if full_width {
        class.push_str(" form-group-full");
    }
    if let Some(indicator) = indicator {
        class.push(' ');
        class.push_str(indicator.class());
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::contact::ValidationError;

    #[test]
    fn group_class_plain() {
        assert_eq!(group_class(None, false), "form-group");
        assert_eq!(group_class(None, true), "form-group form-group-full");
    }

    #[test]
    fn group_class_carries_one_indicator() {
        let ok = group_class(Some(FieldIndicator::Success), false);
        assert_eq!(ok, "form-group success");

        let bad = group_class(
            Some(FieldIndicator::Error(ValidationError::NameTooShort)),
            true,
        );
        assert_eq!(bad, "form-group form-group-full error");
        assert!(!bad.contains("success"));
    }
}
