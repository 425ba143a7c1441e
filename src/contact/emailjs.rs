// SPDX-License-Identifier: MPL-2.0
//! EmailJS REST relay.
//!
//! Posts the message to the EmailJS `email/send` endpoint with the configured
//! service and template. The template receives `name`, `email` and
//! `message` parameters.

use super::sender::{EmailSender, SendError, SendReceipt, SendResult};
use super::validation::ContactMessage;
use crate::config::EmailSettings;
use futures_util::future::BoxFuture;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TemplateParams {
    name: String,
    email: String,
    message: String,
}

/// JSON body of an EmailJS send request.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Payload {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

impl Payload {
    fn new(settings: &EmailSettings, public_key: &str, message: ContactMessage) -> Self {
        Self {
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            user_id: public_key.to_string(),
            template_params: TemplateParams {
                name: message.name,
                email: message.email,
                message: message.message,
            },
        }
    }
}

/// [`EmailSender`] backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    settings: EmailSettings,
}

impl EmailJsSender {
    #[must_use]
    pub fn new(settings: EmailSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &EmailSettings {
        &self.settings
    }
}

impl EmailSender for EmailJsSender {
    fn send(&self, message: ContactMessage) -> BoxFuture<'static, SendResult> {
        let Some(public_key) = self.settings.public_key.clone() else {
            return Box::pin(async { Err(SendError::NotConfigured) });
        };

        let payload = Payload::new(&self.settings, &public_key, message);
        let request = self
            .client
            .post(&self.settings.endpoint)
            .timeout(self.settings.timeout)
            .json(&payload);

        Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|e| SendError::Transport(e.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| SendError::Transport(e.to_string()))?;

            if status.is_success() {
                Ok(SendReceipt {
                    status: status.as_u16(),
                    text,
                })
            } else {
                Err(SendError::Rejected {
                    status: status.as_u16(),
                    text,
                })
            }
        })
    }
}
