//! Contact form state.
//!
//! Holds the value and inline indicator for each field plus the form-level
//! banner. Rendering reads this state; nothing here touches the view tree.

use super::validate::{validate, FormField, Validation, ValidationError};

/// Banner shown after a successful (simulated) send
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Banner shown when a submission is blocked by field errors
pub const FAILURE_MESSAGE: &str = "Please fix the errors above before sending.";

/// Inline marker attached to a single field.
///
/// A field holds at most one indicator, so error and success can never be
/// shown together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIndicator {
    Success,
    Error(ValidationError),
}

impl FieldIndicator {
    pub fn is_error(&self) -> bool {
        matches!(self, FieldIndicator::Error(_))
    }

    /// CSS modifier for the field wrapper
    pub fn class(&self) -> &'static str {
        match self {
            FieldIndicator::Success => "success",
            FieldIndicator::Error(_) => "error",
        }
    }
}

/// Which fields gate a submission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Only fields the visitor touched and left invalid block sending.
    /// A required field that was never typed into is accepted as-is.
    #[default]
    TouchedOnly,
    /// Every required field is validated at submit time, touched or not.
    RequireAll,
}

/// Outcome of one submit cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Sent; the form resets once the reset for `ticket` completes.
    Success { ticket: ResetTicket },
    /// Blocked by at least one field error
    Failure,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }
}

/// Identifies the submission a deferred reset belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

/// Form-level banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Sent,
    Blocked,
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FormMessage::Sent => SUCCESS_MESSAGE,
            FormMessage::Blocked => FAILURE_MESSAGE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormMessage::Sent)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    indicator: Option<FieldIndicator>,
}

/// The contact form: four fields, their indicators and the banner
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FieldState; 4],
    message: Option<FormMessage>,
    policy: SubmitPolicy,
    generation: u64,
    pending_reset: Option<ResetTicket>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.fields[field.index()].value
    }

    pub fn indicator(&self, field: FormField) -> Option<FieldIndicator> {
        self.fields[field.index()].indicator
    }

    pub fn message(&self) -> Option<FormMessage> {
        self.message
    }

    /// Ticket of the reset still waiting to run, if any
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    /// True if any field currently shows an error
    pub fn has_errors(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.indicator.is_some_and(|i| i.is_error()))
    }

    /// Handle an input event: store the value and re-decorate the field.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let indicator = indicator_for(validate(field, &value));
        tracing::debug!(%field, ?indicator, "field input");

        let state = &mut self.fields[field.index()];
        state.value = value;
        state.indicator = indicator;
    }

    /// Handle a submit event.
    ///
    /// On success a reset is armed and its ticket returned. Either way any
    /// reset armed by an earlier submission is superseded.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.policy == SubmitPolicy::RequireAll {
            for field in FormField::REQUIRED {
                let state = &mut self.fields[field.index()];
                state.indicator = indicator_for(validate(field, &state.value));
            }
        }

        if self.has_errors() {
            tracing::debug!("submission blocked by field errors");
            self.message = Some(FormMessage::Blocked);
            self.pending_reset = None;
            return SubmitOutcome::Failure;
        }

        self.generation += 1;
        let ticket = ResetTicket(self.generation);
        self.pending_reset = Some(ticket);
        self.message = Some(FormMessage::Sent);

        tracing::info!(
            name_len = self.value(FormField::Name).chars().count(),
            email_len = self.value(FormField::Email).chars().count(),
            subject_len = self.value(FormField::Subject).chars().count(),
            message_len = self.value(FormField::Message).chars().count(),
            "contact message accepted"
        );

        SubmitOutcome::Success { ticket }
    }

    /// Run the deferred reset for `ticket`.
    ///
    /// Returns false (and changes nothing) if the ticket was superseded by a
    /// later submission or the reset already ran.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset != Some(ticket) {
            tracing::debug!(?ticket, "stale reset ignored");
            return false;
        }
        self.reset();
        true
    }

    /// Clear every value, indicator and the banner.
    pub fn reset(&mut self) {
        for state in &mut self.fields {
            *state = FieldState::default();
        }
        self.message = None;
        self.pending_reset = None;
    }
}

fn indicator_for(validation: Validation) -> Option<FieldIndicator> {
    match validation {
        Validation::Valid => Some(FieldIndicator::Success),
        Validation::Invalid(err) => Some(FieldIndicator::Error(err)),
        Validation::Unchecked => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_field_has_no_indicator() {
        let form = ContactForm::new();
        for field in FormField::ALL {
            assert_eq!(form.indicator(field), None);
            assert_eq!(form.value(field), "");
        }
        assert!(!form.has_errors());
    }

    #[test]
    fn input_replaces_indicator() {
        let mut form = ContactForm::new();

        form.input(FormField::Name, "A");
        assert_eq!(
            form.indicator(FormField::Name),
            Some(FieldIndicator::Error(ValidationError::NameTooShort))
        );

        form.input(FormField::Name, "Al");
        assert_eq!(form.indicator(FormField::Name), Some(FieldIndicator::Success));
        assert!(!form.has_errors());
    }

    #[test]
    fn subject_input_never_decorates() {
        let mut form = ContactForm::new();
        form.input(FormField::Subject, "hi");
        assert_eq!(form.indicator(FormField::Subject), None);
        assert_eq!(form.value(FormField::Subject), "hi");
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut form = ContactForm::new();
        form.input(FormField::Name, "Evan");

        let SubmitOutcome::Success { ticket: first } = form.submit() else {
            panic!("expected success");
        };
        let SubmitOutcome::Success { ticket: second } = form.submit() else {
            panic!("expected success");
        };
        assert_ne!(first, second);

        assert!(!form.complete_reset(first));
        assert_eq!(form.value(FormField::Name), "Evan");

        assert!(form.complete_reset(second));
        assert_eq!(form.value(FormField::Name), "");
        assert!(!form.complete_reset(second));
    }

    #[test]
    fn failure_does_not_arm_reset() {
        let mut form = ContactForm::new();
        form.input(FormField::Email, "nope");
        assert_eq!(form.submit(), SubmitOutcome::Failure);
        assert_eq!(form.pending_reset(), None);
        assert_eq!(form.message(), Some(FormMessage::Blocked));
    }

    #[test]
    fn blocked_submit_drops_earlier_ticket() {
        let mut form = ContactForm::new();
        form.input(FormField::Name, "Evan");
        let SubmitOutcome::Success { ticket } = form.submit() else {
            panic!("expected success");
        };

        form.input(FormField::Name, "E");
        assert_eq!(form.submit(), SubmitOutcome::Failure);
        assert_eq!(form.pending_reset(), None);

        assert!(!form.complete_reset(ticket));
        assert_eq!(form.value(FormField::Name), "E");
        assert_eq!(form.message(), Some(FormMessage::Blocked));
    }

    #[test]
    fn indicator_classes() {
        assert_eq!(FieldIndicator::Success.class(), "success");
        assert_eq!(
            FieldIndicator::Error(ValidationError::InvalidEmail).class(),
            "error"
        );
    }
}
