// SPDX-License-Identifier: MPL-2.0
//! Toast overlay rendering.
//!
//! The overlay is a full-window translucent backdrop with the card centered
//! on top. Clicking the backdrop or the close button emits
//! [`Message::Dismiss`]; clicks on the card itself are swallowed.

use super::state::{Toast, ToastId, ToastKind, FULL_PROGRESS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, center, container, mouse_area, opaque, Container, Row, Stack, Svg, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Resolution of the progress bar, in portions.
const PROGRESS_STEPS: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Backdrop or close button pressed.
    Dismiss(ToastId),
}

/// Accent color of a toast kind.
#[must_use]
pub fn accent(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Info => palette::INFO_500,
    }
}

fn kind_icon<'a>(kind: ToastKind) -> Svg<'a> {
    match kind {
        ToastKind::Success => icons::check(),
        ToastKind::Error => icons::cross(),
        ToastKind::Info => icons::info(),
    }
}

/// Resolves the toast text in the current locale.
#[must_use]
pub fn message_text(toast: &Toast, i18n: &I18n) -> String {
    i18n.tr(toast.message_key())
}

/// Renders the overlay for `toast`.
pub fn view<'a>(toast: &'a Toast, i18n: &'a I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let id = toast.id();
    let accent_color = accent(toast.kind());

    let badge = Container::new(icons::tinted(kind_icon(toast.kind()), sizing::ICON_MD, accent_color))
        .padding(spacing::XS)
        .style(move |_theme: &Theme| badge_style(accent_color));

    let text_color = colors.text_primary;
    let message = Text::new(message_text(toast, i18n))
        .size(typography::BODY_LG)
        .color(text_color);

    let close = button(icons::tinted(icons::cross(), sizing::ICON_SM, colors.text_secondary))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(close_button_style);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(badge)
        .push(Container::new(message).width(Length::Fill))
        .push(close);

    let body = iced::widget::column![header, progress_bar(toast.progress(), accent_color)]
        .spacing(spacing::MD);

    let surface = colors.surface_card;
    let border_color = colors.border;
    let card = Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::LG)
        .style(move |_theme: &Theme| card_style(surface, border_color));

    let backdrop_color = colors.backdrop;
    let backdrop = mouse_area(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| backdrop_style(backdrop_color)),
    )
    .on_press(Message::Dismiss(id));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(center(opaque(card)))
        .into()
}

/// Splits `progress` into filled and empty portions of the bar.
fn progress_portions(progress: f32) -> (u16, u16) {
    let ratio = (progress / FULL_PROGRESS).clamp(0.0, 1.0);
    let filled = (ratio * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

fn progress_bar<'a>(progress: f32, accent_color: Color) -> Element<'a, Message> {
    let (filled, empty) = progress_portions(progress);
    let mut track = Row::new().height(Length::Fixed(sizing::TOAST_PROGRESS_HEIGHT));

    if filled > 0 {
        track = track.push(
            Container::new(iced::widget::Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| bar_style(accent_color)),
        );
    }
    if empty > 0 {
        track = track.push(
            Container::new(iced::widget::Space::new())
                .width(Length::FillPortion(empty))
                .height(Length::Fill),
        );
    }

    Container::new(track)
        .width(Length::Fill)
        .style(move |_theme: &Theme| track_style(accent_color))
        .into()
}

fn backdrop_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

fn card_style(surface: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface)),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

fn badge_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent_color
        })),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn track_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..accent_color
        })),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bar_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent_color)),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ZINC_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::ZINC_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
