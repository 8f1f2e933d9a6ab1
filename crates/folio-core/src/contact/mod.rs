//! Contact form: field rules, form state and the deferred reset.
//!
//! ## Flow
//!
//! ```text
//! input(field, value) ──> validate ──> indicator (success | error)
//!
//! submit() ──> any error? ──yes──> Blocked banner
//!                  │
//!                  no
//!                  ▼
//!            Sent banner + ResetTicket ──(ResetTimer, 3s)──> complete_reset(ticket)
//! ```
//!
//! Sending is simulated; nothing leaves the process.

mod form;
mod timer;
mod validate;

pub use form::{
    ContactForm, FieldIndicator, FormMessage, ResetTicket, SubmitOutcome, SubmitPolicy,
    FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use timer::{ResetTimer, DEFAULT_RESET_DELAY};
pub use validate::{
    is_valid_email, validate, FormField, Validation, ValidationError, MIN_MESSAGE_CHARS,
    MIN_NAME_CHARS,
};
