// SPDX-License-Identifier: MPL-2.0
//! Email delivery port.
//!
//! The contact controller only needs a success/failure outcome; the payload
//! of either side is logged and otherwise ignored.

use super::validation::ContactMessage;
use futures_util::future::BoxFuture;
use std::fmt;

/// Acknowledgement from the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

/// Errors that can occur while sending a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The relay answered with a non-success status.
    Rejected {
        status: u16,
        text: String,
    },

    /// The request never got an answer (DNS, TLS, timeout...).
    Transport(String),

    /// No public key was configured, so nothing was sent.
    NotConfigured,
}

impl SendError {
    /// Translation key of the user-facing message.
    ///
    /// Every send failure is reported the same way.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "contact-send-failure"
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Rejected { status, text } => {
                write!(f, "relay rejected the message ({status}): {text}")
            }
            SendError::Transport(msg) => write!(f, "transport error: {msg}"),
            SendError::NotConfigured => write!(f, "email relay public key is not configured"),
        }
    }
}

impl std::error::Error for SendError {}

/// Outcome of one send attempt.
pub type SendResult = Result<SendReceipt, SendError>;

/// Delivers contact messages to the site owner.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every submission. Each call performs exactly one delivery attempt.
pub trait EmailSender: Send + Sync {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, SendResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let error = SendError::Rejected {
            status: 400,
            text: "The Public Key is invalid".to_string(),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("400"));
        assert!(rendered.contains("Public Key"));
    }

    #[test]
    fn all_failures_share_one_message() {
        assert_eq!(SendError::NotConfigured.i18n_key(), "contact-send-failure");
        assert_eq!(
            SendError::Transport("timeout".into()).i18n_key(),
            "contact-send-failure"
        );
    }
}
