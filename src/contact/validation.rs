// SPDX-License-Identifier: MPL-2.0
//! Fail-fast contact form validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! missing form, empty name, empty email, empty message, malformed email.
//! "Empty" means empty after trimming whitespace. Accepted values are passed
//! on untrimmed.

use super::form::ContactForm;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Loose `local@domain.tld` shape check.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("fail to create a regex for the email")
});

/// Why a submission was refused before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No form to read from.
    MissingForm,
    EmptyName,
    EmptyEmail,
    EmptyMessage,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::MissingForm => "contact-error-missing-form",
            ValidationError::EmptyName => "contact-error-empty-name",
            ValidationError::EmptyEmail => "contact-error-empty-email",
            ValidationError::EmptyMessage => "contact-error-empty-message",
            ValidationError::InvalidEmail => "contact-error-invalid-email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingForm => write!(f, "contact form is not available"),
            ValidationError::EmptyName => write!(f, "name is empty"),
            ValidationError::EmptyEmail => write!(f, "email is empty"),
            ValidationError::EmptyMessage => write!(f, "message is empty"),
            ValidationError::InvalidEmail => write!(f, "email address is malformed"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated message, ready to hand to an [`EmailSender`](super::EmailSender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Returns true if `email` has the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates `form` and extracts the message to send.
pub fn validate(form: Option<&ContactForm>) -> Result<ContactMessage, ValidationError> {
    let form = form.ok_or(ValidationError::MissingForm)?;
    let fields = form.fields();

    if fields.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if fields.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if fields.message.trim().is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactMessage {
        name: fields.name,
        email: fields.email,
        message: fields.message,
    })
}
