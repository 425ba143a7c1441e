// SPDX-License-Identifier: MPL-2.0
//! Contact form: validation, delivery and outcome reporting.
//!
//! Flow: submit → [`validate`] → on failure one error [`Report`] and stop →
//! on success an asynchronous [`EmailSender::send`] → on completion one
//! outcome [`Report`].

mod controller;
pub mod emailjs;
mod form;
mod sender;
mod validation;

pub use controller::{Controller, Report, Submission, SEND_SUCCESS_KEY};
pub use emailjs::EmailJsSender;
pub use form::{ContactForm, Field, FormFields};
pub use sender::{EmailSender, SendError, SendReceipt, SendResult};
pub use validation::{is_valid_email, validate, ContactMessage, ValidationError};
