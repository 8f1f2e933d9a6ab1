//! End-to-end contact form scenarios
//!
//! Drives the form the way the page does: input events, a submit, and the
//! deferred reset run through a ResetTimer on paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use folio_core::contact::{
    ContactForm, FieldIndicator, FormField, FormMessage, ResetTimer, SubmitOutcome,
    ValidationError, DEFAULT_RESET_DELAY, SUCCESS_MESSAGE,
};
use parking_lot::Mutex;

/// Submit and, on success, schedule the reset the way the page does.
fn submit_and_schedule(
    form: &Arc<Mutex<ContactForm>>,
    timer: &mut ResetTimer,
) -> (SubmitOutcome, Option<tokio::task::JoinHandle<bool>>) {
    let outcome = form.lock().submit();
    let handle = match outcome {
        SubmitOutcome::Success { ticket } => {
            let elapsed = timer.arm();
            let form = form.clone();
            Some(tokio::spawn(async move {
                if elapsed.await {
                    form.lock().complete_reset(ticket)
                } else {
                    false
                }
            }))
        }
        SubmitOutcome::Failure => {
            timer.cancel();
            None
        }
    };
    (outcome, handle)
}

fn fill_valid(form: &mut ContactForm) {
    form.input(FormField::Name, "Al");
    form.input(FormField::Email, "a@b.co");
    form.input(FormField::Message, "this is fine");
}

// ============================================================================
// Field scenarios
// ============================================================================

#[test]
fn test_name_scenario() {
    let mut form = ContactForm::new();

    form.input(FormField::Name, "A");
    assert_eq!(
        form.indicator(FormField::Name),
        Some(FieldIndicator::Error(ValidationError::NameTooShort))
    );

    form.input(FormField::Name, "Al");
    assert_eq!(form.indicator(FormField::Name), Some(FieldIndicator::Success));
}

#[test]
fn test_email_scenario() {
    let mut form = ContactForm::new();

    form.input(FormField::Email, "bad-email");
    assert_eq!(
        form.indicator(FormField::Email),
        Some(FieldIndicator::Error(ValidationError::InvalidEmail))
    );

    form.input(FormField::Email, "a@b.co");
    assert_eq!(form.indicator(FormField::Email), Some(FieldIndicator::Success));
}

#[test]
fn test_message_scenario() {
    let mut form = ContactForm::new();

    form.input(FormField::Message, "short");
    assert_eq!(
        form.indicator(FormField::Message),
        Some(FieldIndicator::Error(ValidationError::MessageTooShort))
    );

    form.input(FormField::Message, "this is fine");
    assert_eq!(form.indicator(FormField::Message), Some(FieldIndicator::Success));
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_with_error_fails() {
    let mut form = ContactForm::new();
    fill_valid(&mut form);
    form.input(FormField::Email, "bad-email");

    assert_eq!(form.submit(), SubmitOutcome::Failure);
    assert_eq!(form.message(), Some(FormMessage::Blocked));
    // values are kept so the visitor can fix them
    assert_eq!(form.value(FormField::Name), "Al");
}

#[test]
fn test_fixing_error_unblocks_submit() {
    let mut form = ContactForm::new();
    fill_valid(&mut form);
    form.input(FormField::Name, "A");
    assert!(!form.submit().is_success());

    form.input(FormField::Name, "Al");
    assert!(form.submit().is_success());
    assert_eq!(form.message(), Some(FormMessage::Sent));
    assert_eq!(form.message().map(|m| m.text()), Some(SUCCESS_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn test_success_then_reset_after_delay() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    fill_valid(&mut form.lock());
    let mut timer = ResetTimer::new(DEFAULT_RESET_DELAY);

    let (outcome, handle) = submit_and_schedule(&form, &mut timer);
    assert!(outcome.is_success());
    let handle = handle.expect("reset scheduled");

    // just before the delay nothing has changed
    tokio::time::sleep(DEFAULT_RESET_DELAY - Duration::from_millis(1)).await;
    {
        let form = form.lock();
        assert_eq!(form.message(), Some(FormMessage::Sent));
        assert_eq!(form.value(FormField::Email), "a@b.co");
    }

    assert!(handle.await.unwrap());

    let form = form.lock();
    assert_eq!(form.message(), None);
    for field in FormField::ALL {
        assert_eq!(form.value(field), "", "{field} not cleared");
        assert_eq!(form.indicator(field), None, "{field} still decorated");
    }
}

#[tokio::test(start_paused = true)]
async fn test_new_submission_supersedes_pending_reset() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    fill_valid(&mut form.lock());
    let mut timer = ResetTimer::new(Duration::from_secs(3));

    let (_, first) = submit_and_schedule(&form, &mut timer);
    tokio::time::sleep(Duration::from_secs(2)).await;
    let (_, second) = submit_and_schedule(&form, &mut timer);

    assert!(!first.unwrap().await.unwrap());

    // the first deadline has passed but the form is untouched
    assert_eq!(form.lock().value(FormField::Name), "Al");

    assert!(second.unwrap().await.unwrap());
    assert_eq!(form.lock().value(FormField::Name), "");
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_reset() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    fill_valid(&mut form.lock());
    let mut timer = ResetTimer::new(Duration::from_secs(3));

    let (_, handle) = submit_and_schedule(&form, &mut timer);
    drop(timer);

    assert!(!handle.unwrap().await.unwrap());
    assert_eq!(form.lock().message(), Some(FormMessage::Sent));
}

#[tokio::test(start_paused = true)]
async fn test_blocked_submission_cancels_pending_reset() {
    let form = Arc::new(Mutex::new(ContactForm::new()));
    fill_valid(&mut form.lock());
    let mut timer = ResetTimer::new(Duration::from_secs(3));

    let (_, first) = submit_and_schedule(&form, &mut timer);
    form.lock().input(FormField::Email, "bad-email");
    let (outcome, second) = submit_and_schedule(&form, &mut timer);
    assert_eq!(outcome, SubmitOutcome::Failure);
    assert!(second.is_none());
    assert!(!timer.is_armed());

    assert!(!first.unwrap().await.unwrap());
    let form = form.lock();
    assert_eq!(form.value(FormField::Email), "bad-email");
    assert_eq!(form.message(), Some(FormMessage::Blocked));
}
