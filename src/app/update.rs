// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{persistence, App, Message};
use crate::contact::{Field, Report, Submission};
use crate::ui::navbar;
use crate::ui::sections::{contact, Section, PAGE_SCROLLABLE_ID};
use crate::ui::toast::{self, Toast};
use iced::widget::{operation, text_editor, Id};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Contact(message) => handle_contact(app, message),
        Message::SendFinished(result) => {
            let report = app.controller.complete(&mut app.form, &result);
            if result.is_ok() {
                app.editor = text_editor::Content::new();
            }
            show_report(app, report)
        }
        Message::Toast(event) => {
            if let Some(closed) = app.toasts.handle(event) {
                log::debug!("toast {:?} closed: {:?}", closed.id, closed.reason);
            }
            Task::none()
        }
        Message::ToastView(toast::Message::Dismiss(id)) => {
            if let Some(closed) = app.toasts.dismiss(id) {
                log::debug!("toast {:?} closed: {:?}", closed.id, closed.reason);
            }
            Task::none()
        }
        Message::EscapePressed => {
            if let Some(id) = app.toasts.current().map(Toast::id) {
                app.toasts.dismiss(id);
            }
            Task::none()
        }
        Message::ScrollTo(section) => scroll_to(section),
    }
}

fn scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), section.anchor())
}

fn handle_contact(app: &mut App, message: contact::Message) -> Task<Message> {
    match message {
        contact::Message::NameChanged(value) => {
            app.form.set(Field::Name, value);
            Task::none()
        }
        contact::Message::EmailChanged(value) => {
            app.form.set(Field::Email, value);
            Task::none()
        }
        contact::Message::MessageEdited(action) => {
            let is_edit = action.is_edit();
            app.editor.perform(action);
            if is_edit {
                app.form.set(Field::Message, app.editor.text());
            }
            Task::none()
        }
        contact::Message::Submit => {
            let submission = app.controller.submit(Some(&app.form));
            match submission {
                Submission::Rejected(error) => show_report(app, Report::from(error)),
                Submission::Sending(send) => Task::perform(send, Message::SendFinished),
            }
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    let event = navbar::update(message, app.i18n.current_locale(), app.theme_mode);
    let saved = match event {
        navbar::Event::None => return Task::none(),
        navbar::Event::ScrollTo(section) => return scroll_to(section),
        navbar::Event::LanguageChanged(locale) => {
            persistence::apply_language_change(&mut app.i18n, locale, app.config_dir.clone())
        }
        navbar::Event::ThemeChanged(mode) => {
            app.theme_mode = mode;
            persistence::apply_theme_change(mode, app.config_dir.clone())
        }
    };

    match saved {
        Ok(()) => Task::none(),
        Err(err) => {
            log::warn!("Failed to save config: {err}");
            let toast = Toast::error("notification-config-save-error").with_duration(app.toast_duration);
            app.show_toast(toast)
        }
    }
}

fn show_report(app: &mut App, report: Report) -> Task<Message> {
    let toast = report.to_toast(app.toast_duration);
    app.show_toast(toast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::contact::{
        ContactMessage, EmailSender, SendError, SendReceipt, SendResult, SEND_SUCCESS_KEY,
    };
    use crate::content::Content;
    use crate::app::Flags;
    use crate::ui::toast::{ToastEvent, ToastKind};
    use futures_util::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct CountingSender(AtomicUsize);

    impl EmailSender for CountingSender {
        fn send(&self, _message: ContactMessage) -> BoxFuture<'static, SendResult> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Box::pin(async {
                Ok(SendReceipt {
                    status: 200,
                    text: "OK".to_string(),
                })
            })
        }
    }

    fn app() -> (App, Arc<CountingSender>, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let sender = Arc::new(CountingSender(AtomicUsize::new(0)));
        let flags = Flags {
            lang: Some("en-US".to_string()),
            config_dir: None,
            content: Content::load().unwrap(),
        };
        let app = App::with_sender(
            flags,
            &Config::default(),
            sender.clone(),
            Some(dir.path().to_path_buf()),
        );
        (app, sender, dir)
    }

    fn type_form(app: &mut App, name: &str, email: &str) {
        let _ = update(app, Message::Contact(contact::Message::NameChanged(name.into())));
        let _ = update(app, Message::Contact(contact::Message::EmailChanged(email.into())));
        app.form.set(Field::Message, "hi");
    }

    #[test]
    fn invalid_submit_shows_error_toast_without_sending() {
        let (mut app, sender, _dir) = app();
        type_form(&mut app, "A", "not-an-email");

        let _ = update(&mut app, Message::Contact(contact::Message::Submit));

        let toast = app.toast().expect("a toast should be visible");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.message_key(), "contact-error-invalid-email");
        assert_eq!(sender.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn valid_submit_starts_a_send() {
        let (mut app, sender, _dir) = app();
        type_form(&mut app, "A", "a@b.co");

        let _ = update(&mut app, Message::Contact(contact::Message::Submit));

        assert_eq!(sender.0.load(Ordering::SeqCst), 1);
        assert!(app.toast().is_none());
    }

    #[test]
    fn successful_send_clears_form_and_reports() {
        let (mut app, _sender, _dir) = app();
        type_form(&mut app, "A", "a@b.co");

        let ok = Ok(SendReceipt {
            status: 200,
            text: "OK".to_string(),
        });
        let _ = update(&mut app, Message::SendFinished(ok));

        assert!(app.form().is_empty());
        assert_eq!(app.toast().map(Toast::message_key), Some(SEND_SUCCESS_KEY));
    }

    #[test]
    fn failed_send_keeps_form_and_reports() {
        let (mut app, _sender, _dir) = app();
        type_form(&mut app, "A", "a@b.co");

        let _ = update(
            &mut app,
            Message::SendFinished(Err(SendError::Transport("offline".into()))),
        );

        assert_eq!(app.form().get(Field::Name), "A");
        let toast = app.toast().unwrap();
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.message_key(), "contact-send-failure");
    }

    #[test]
    fn new_report_replaces_visible_toast() {
        let (mut app, _sender, _dir) = app();
        let _ = update(&mut app, Message::Contact(contact::Message::Submit));
        let first = app.toast().map(Toast::id).unwrap();

        type_form(&mut app, "A", "");
        let _ = update(&mut app, Message::Contact(contact::Message::Submit));

        let second = app.toast().unwrap();
        assert_ne!(second.id(), first);
        assert_eq!(second.message_key(), "contact-error-empty-email");
    }

    #[test]
    fn expiry_and_dismissal_remove_the_toast() {
        let (mut app, _sender, _dir) = app();
        let _ = update(&mut app, Message::Contact(contact::Message::Submit));
        let id = app.toast().map(Toast::id).unwrap();

        let _ = update(&mut app, Message::Toast(ToastEvent::Tick(id)));
        assert!(app.toast().is_some());
        let _ = update(&mut app, Message::Toast(ToastEvent::Expired(id)));
        assert!(app.toast().is_none());

        let _ = update(&mut app, Message::Contact(contact::Message::Submit));
        let id = app.toast().map(Toast::id).unwrap();
        let _ = update(&mut app, Message::ToastView(toast::Message::Dismiss(id)));
        assert!(app.toast().is_none());
    }

    #[test]
    fn escape_dismisses_the_toast() {
        let (mut app, _sender, _dir) = app();
        let _ = update(&mut app, Message::Contact(contact::Message::Submit));

        let _ = update(&mut app, Message::EscapePressed);

        assert!(app.toast().is_none());
    }

    #[test]
    fn language_switch_is_applied() {
        let (mut app, _sender, _dir) = app();

        let _ = update(
            &mut app,
            Message::Navbar(navbar::Message::SelectLanguage("th".parse().unwrap())),
        );

        assert_eq!(app.i18n.current_locale().to_string(), "th");
        assert!(app.toast().is_none());
    }

    #[test]
    fn theme_switch_is_applied() {
        let (mut app, _sender, _dir) = app();

        let _ = update(
            &mut app,
            Message::Navbar(navbar::Message::SelectTheme(crate::ui::theming::ThemeMode::Light)),
        );

        assert_eq!(app.theme_mode(), crate::ui::theming::ThemeMode::Light);
    }

    #[test]
    fn navigation_returns_a_scroll_task() {
        let (mut app, _sender, _dir) = app();

        let hero = update(&mut app, Message::ScrollTo(Section::Contact));
        let navbar = update(
            &mut app,
            Message::Navbar(navbar::Message::Navigate(Section::Projects)),
        );

        assert!(hero.units() > 0);
        assert!(navbar.units() > 0);
        assert_eq!(Task::<Message>::none().units(), 0);
    }

    #[test]
    fn navigation_leaves_state_alone() {
        let (mut app, _sender, _dir) = app();
        let _ = update(&mut app, Message::Contact(contact::Message::NameChanged("A".into())));

        let _ = update(&mut app, Message::ScrollTo(Section::Home));

        assert!(app.toast().is_none());
        assert_eq!(app.form().get(Field::Name), "A");
    }

    #[test]
    fn unreadable_settings_survive_a_theme_switch() {
        let (mut app, _sender, dir) = app();
        let path = dir.path().join("settings.toml");
        let original = "[general]\ntheme_mode = \"darkk\"\n\n[email]\npublic_key = \"my-key\"\n";
        std::fs::write(&path, original).unwrap();

        let _ = update(
            &mut app,
            Message::Navbar(navbar::Message::SelectTheme(crate::ui::theming::ThemeMode::Light)),
        );

        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
        let toast = app.toast().expect("a toast should be visible");
        assert_eq!(toast.message_key(), "notification-config-save-error");
    }
}
