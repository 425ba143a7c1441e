// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections, the
//! contact controller and the toast overlay.
//!
//! The `App` struct wires together localization, page content, the contact
//! form and the single toast slot, and translates messages into side effects
//! like sending email or persisting preferences.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::contact::{ContactForm, Controller, EmailJsSender, EmailSender};
use crate::content::Content;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{self, Toast, ToastHost};
use iced::widget::text_editor;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    content: Content,
    theme_mode: ThemeMode,
    /// Lifetime of every toast, from config.
    toast_duration: Duration,
    /// Config directory override; `None` uses the global resolution.
    config_dir: Option<PathBuf>,
    controller: Controller,
    form: ContactForm,
    /// Multi-line editor backing the form's message field.
    editor: text_editor::Content,
    toasts: ToastHost<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("form", &self.form)
            .field("toasts", &self.toasts)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the on-disk config and the
    /// environment.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let settings = config.email.resolve();
        if settings.public_key.is_none() {
            log::warn!(
                "{} is not set, contact messages cannot be delivered",
                config::ENV_EMAIL_PUBLIC_KEY
            );
        }

        let sender: Arc<dyn EmailSender> = Arc::new(EmailJsSender::new(settings));
        let mut app = Self::with_sender(flags, &config, sender, None);

        let task = match config_warning {
            Some(key) => {
                let toast = Toast::error(key).with_duration(app.toast_duration);
                app.show_toast(toast)
            }
            None => Task::none(),
        };
        (app, task)
    }

    /// Builds the application around an explicit sender and config.
    pub fn with_sender(
        flags: Flags,
        config: &Config,
        sender: Arc<dyn EmailSender>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            i18n: I18n::new(flags.lang, config),
            content: flags.content,
            theme_mode: config.general.theme_mode,
            toast_duration: config.toast_duration(),
            config_dir,
            controller: Controller::new(sender),
            form: ContactForm::new(),
            editor: text_editor::Content::new(),
            toasts: ToastHost::new(),
        }
    }

    fn title(&self) -> String {
        format!(
            "{} • {}",
            self.content.profile.handle,
            self.i18n.tr("window-title")
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.toasts.is_visible())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Shows `toast` in place of any visible one and starts its timers.
    ///
    /// The returned task drives the countdown; its abort handle is owned by
    /// the toast slot, so removing the toast stops the timers.
    fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        let events = toast::countdown(toast.id(), toast.duration());
        let (task, handle) = Task::run(events, Message::Toast).abortable();
        self.toasts.show(toast, handle.abort_on_drop());
        task
    }

    /// Currently visible toast, if any.
    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.current()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}
