//! Per-field validation rules for the contact form.
//!
//! The rules are deliberately small: they catch typos while the visitor
//! types, they do not try to prove an address deliverable.

use std::fmt;

use thiserror::Error;

/// Minimum number of characters (after trimming) for a name
pub const MIN_NAME_CHARS: usize = 2;

/// A message must be strictly longer than this many characters
pub const MIN_MESSAGE_CHARS: usize = 10;

/// One input of the contact form
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Fields that must be valid before the form can be sent
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// The element id / form name used for this field
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Subject)
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Subject => 2,
            FormField::Message => 3,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A failed field rule. The `Display` text is what the visitor sees.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Result of running a field's rule against a value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(ValidationError),
    /// The field has no rule (subject)
    Unchecked,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Run the rule for `field` against `value`.
pub fn validate(field: FormField, value: &str) -> Validation {
    match field {
        FormField::Name => {
            if value.trim().chars().count() >= MIN_NAME_CHARS {
                Validation::Valid
            } else {
                Validation::Invalid(ValidationError::NameTooShort)
            }
        }
        FormField::Email => {
            if is_valid_email(value) {
                Validation::Valid
            } else {
                Validation::Invalid(ValidationError::InvalidEmail)
            }
        }
        FormField::Message => {
            if value.chars().count() > MIN_MESSAGE_CHARS {
                Validation::Valid
            } else {
                Validation::Invalid(ValidationError::MessageTooShort)
            }
        }
        FormField::Subject => Validation::Unchecked,
    }
}

/// Minimal shape check: `local@domain.tld`.
///
/// Equivalent to the anchored pattern `^[^\s@]+@[^\s@]+\.[^\s]+$`: no
/// whitespace anywhere, a non-empty local part, then a domain part without
/// `@` followed by a dot and at least one more character. Anything after
/// that final dot may contain `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, rest)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    // The domain label before the dot may not contain another '@'.
    let limit = rest.find('@').unwrap_or(rest.len());
    rest[..limit]
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < rest.len())
}
