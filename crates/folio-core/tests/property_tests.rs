//! Property-based tests for the contact form rules
//!
//! Uses proptest to check the validation predicates and the one-indicator
//! per field invariant over arbitrary inputs.

use folio_core::contact::{
    is_valid_email, validate, ContactForm, FieldIndicator, FormField, SubmitOutcome, Validation,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Characters allowed in a local part or domain label
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.+-]{1,20}").expect("valid regex")
}

fn email_strategy() -> impl Strategy<Value = String> {
    (
        label_strategy(),
        prop::string::string_regex("[a-zA-Z0-9-]{1,20}").expect("valid regex"),
        prop::string::string_regex("[a-zA-Z]{1,6}").expect("valid regex"),
    )
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

#[derive(Debug, Clone)]
enum FieldOp {
    Input(FormField, String),
    Submit,
}

fn field_strategy() -> impl Strategy<Value = FormField> {
    prop_oneof![
        Just(FormField::Name),
        Just(FormField::Email),
        Just(FormField::Subject),
        Just(FormField::Message),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<FieldOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (field_strategy(), ".{0,20}").prop_map(|(f, v)| FieldOp::Input(f, v)),
            1 => Just(FieldOp::Submit),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every string of the accepted shape is valid
    #[test]
    fn accepted_shape_is_valid(email in email_strategy()) {
        prop_assert!(is_valid_email(&email));
        prop_assert!(validate(FormField::Email, &email).is_valid());
    }

    /// Without an '@' there is no valid email
    #[test]
    fn missing_at_is_invalid(s in "[^@]{0,40}") {
        prop_assert!(!is_valid_email(&s));
    }

    /// Without a '.' after the '@' there is no valid email
    #[test]
    fn missing_dot_after_at_is_invalid(local in "[a-z]{1,10}", domain in "[a-z@]{0,10}") {
        let email = format!("{local}@{domain}");
        prop_assert!(!is_valid_email(&email));
    }

    /// Whitespace anywhere rejects the address
    #[test]
    fn whitespace_is_invalid(email in email_strategy(), at in 0usize..40, ws in "[ \t\n]") {
        let mut chars: Vec<char> = email.chars().collect();
        let at = at.min(chars.len());
        chars.insert(at, ws.chars().next().unwrap());
        let email: String = chars.into_iter().collect();
        prop_assert!(!is_valid_email(&email));
    }

    /// Name validity depends only on trimmed character count
    #[test]
    fn name_rule(name in ".{0,12}") {
        let expected = name.trim().chars().count() >= 2;
        prop_assert_eq!(validate(FormField::Name, &name).is_valid(), expected);
    }

    /// Message validity depends only on character count
    #[test]
    fn message_rule(message in ".{0,20}") {
        let expected = message.chars().count() > 10;
        prop_assert_eq!(validate(FormField::Message, &message).is_valid(), expected);
    }

    /// After any input, the field shows exactly the indicator its rule says
    #[test]
    fn indicator_matches_latest_input(ops in ops_strategy()) {
        let mut form = ContactForm::new();
        for op in ops {
            match op {
                FieldOp::Input(field, value) => {
                    form.input(field, value.clone());
                    let indicator = form.indicator(field);
                    let expected = match validate(field, &value) {
                        Validation::Valid => Some(FieldIndicator::Success),
                        Validation::Invalid(err) => Some(FieldIndicator::Error(err)),
                        Validation::Unchecked => None,
                    };
                    prop_assert_eq!(indicator, expected);
                }
                FieldOp::Submit => {
                    let had_errors = form.has_errors();
                    let outcome = form.submit();
                    prop_assert_eq!(outcome == SubmitOutcome::Failure, had_errors);
                }
            }
        }
    }

    /// A successful submit followed by its reset always leaves an empty form
    #[test]
    fn reset_clears_everything(values in prop::collection::vec(".{0,20}", 4)) {
        let mut form = ContactForm::new();
        for (field, value) in FormField::ALL.into_iter().zip(values) {
            form.input(field, value);
        }
        if let SubmitOutcome::Success { ticket } = form.submit() {
            prop_assert!(form.complete_reset(ticket));
            for field in FormField::ALL {
                prop_assert_eq!(form.value(field), "");
                prop_assert_eq!(form.indicator(field), None);
            }
            prop_assert_eq!(form.message(), None);
        }
    }
}
