//! Contact Section Component
//!
//! Contact form with inline validation and a simulated send. After a
//! successful send the form resets itself once the reset delay elapses;
//! the pending reset is cancelled if the section is torn down first.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::contact::{ContactForm, FormField, ResetTimer, SubmitOutcome};
use folio_core::profile::{Section, PROFILE};
use folio_ui::{Button, ButtonVariant, FieldInput, FieldTextArea, FormBanner};

use crate::context::use_config;

#[component]
pub fn ContactSection() -> Element {
    let config = use_config();
    let mut form = use_signal(|| ContactForm::with_policy(config.submit_policy));
    let timer = use_hook(|| Rc::new(RefCell::new(ResetTimer::new(config.reset_delay))));

    use_drop({
        let timer = timer.clone();
        move || timer.borrow_mut().cancel()
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = form.write().submit();
        match outcome {
            SubmitOutcome::Success { ticket } => {
                let elapsed = timer.borrow_mut().arm();
                spawn(async move {
                    if elapsed.await {
                        form.write().complete_reset(ticket);
                    }
                });
            }
            SubmitOutcome::Failure => timer.borrow_mut().cancel(),
        }
    };

    let state = form.read();

    rsx! {
        section { id: Section::Contact.anchor(), class: "section section-alt",
            div { class: "container",
                h2 { "Get In Touch" }
                div { class: "contact-content",
                    p { "{PROFILE.contact_blurb}" }
                    form {
                        id: "contact-form",
                        class: "contact-form",
                        "novalidate": "true",
                        onsubmit: on_submit,
                        div { class: "form-grid",
                            FieldInput {
                                field: FormField::Name,
                                value: state.value(FormField::Name).to_string(),
                                indicator: state.indicator(FormField::Name),
                                oninput: move |v: String| form.write().input(FormField::Name, v),
                            }
                            FieldInput {
                                field: FormField::Email,
                                input_type: "email".to_string(),
                                value: state.value(FormField::Email).to_string(),
                                indicator: state.indicator(FormField::Email),
                                oninput: move |v: String| form.write().input(FormField::Email, v),
                            }
                            FieldInput {
                                field: FormField::Subject,
                                full_width: true,
                                value: state.value(FormField::Subject).to_string(),
                                indicator: state.indicator(FormField::Subject),
                                oninput: move |v: String| form.write().input(FormField::Subject, v),
                            }
                            FieldTextArea {
                                field: FormField::Message,
                                value: state.value(FormField::Message).to_string(),
                                indicator: state.indicator(FormField::Message),
                                oninput: move |v: String| form.write().input(FormField::Message, v),
                            }
                            div { class: "form-group form-group-full",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    button_type: "submit".to_string(),
                                    "Send Message"
                                }
                                FormBanner { message: state.message() }
                            }
                        }
                    }
                }
            }
        }
    }
}
