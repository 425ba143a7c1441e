// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Listens for Escape while a toast is visible.
///
/// Toast timers are not subscriptions: each toast drives its own countdown
/// task, owned by the toast slot.
pub fn create_event_subscription(toast_visible: bool) -> Subscription<Message> {
    if !toast_visible {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
