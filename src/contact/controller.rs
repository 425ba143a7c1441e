// SPDX-License-Identifier: MPL-2.0
//! Submission pipeline: validate, send, report.
//!
//! The controller is stateless apart from its sender. It never deduplicates:
//! every accepted submission produces one send, and every outcome produces one
//! [`Report`], which the page turns into a toast.

use super::form::ContactForm;
use super::sender::{EmailSender, SendResult};
use super::validation::{validate, ValidationError};
use crate::ui::toast::{Toast, ToastKind};
use futures_util::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;

/// i18n key of the success report.
pub const SEND_SUCCESS_KEY: &str = "contact-send-success";

/// What the user is told about a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub kind: ToastKind,
    pub message_key: &'static str,
}

impl Report {
    #[must_use]
    pub fn success(message_key: &'static str) -> Self {
        Self {
            kind: ToastKind::Success,
            message_key,
        }
    }

    #[must_use]
    pub fn error(message_key: &'static str) -> Self {
        Self {
            kind: ToastKind::Error,
            message_key,
        }
    }

    /// Builds the toast announcing this report.
    #[must_use]
    pub fn to_toast(self, duration: Duration) -> Toast {
        Toast::new(self.kind, self.message_key).with_duration(duration)
    }
}

impl From<ValidationError> for Report {
    fn from(error: ValidationError) -> Self {
        Report::error(error.i18n_key())
    }
}

/// Result of [`Controller::submit`].
pub enum Submission {
    /// Validation failed; nothing was sent.
    Rejected(ValidationError),
    /// The message is on its way. Resolve the future, then call
    /// [`Controller::complete`].
    Sending(BoxFuture<'static, SendResult>),
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Submission::Rejected(error) => f.debug_tuple("Rejected").field(error).finish(),
            Submission::Sending(_) => f.write_str("Sending(..)"),
        }
    }
}

/// Drives the contact form through validation and delivery.
#[derive(Clone)]
pub struct Controller {
    sender: Arc<dyn EmailSender>,
}

impl Controller {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        Self { sender }
    }

    /// Validates `form` and, if it passes, starts sending it.
    pub fn submit(&self, form: Option<&ContactForm>) -> Submission {
        match validate(form) {
            Ok(message) => {
                log::debug!("sending contact message from {}", message.email);
                Submission::Sending(self.sender.send(message))
            }
            Err(error) => {
                log::debug!("contact form rejected: {error}");
                Submission::Rejected(error)
            }
        }
    }

    /// Applies a send outcome. Success clears `form`; failure leaves it as is.
    pub fn complete(&self, form: &mut ContactForm, result: &SendResult) -> Report {
        match result {
            Ok(receipt) => {
                log::info!("contact message sent: {} {}", receipt.status, receipt.text);
                form.clear();
                Report::success(SEND_SUCCESS_KEY)
            }
            Err(error) => {
                log::warn!("contact message failed: {error}");
                Report::error(error.i18n_key())
            }
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller").finish_non_exhaustive()
    }
}
