// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the site handle, section links, language switch and
//! theme switch.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::sections::Section;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Background, Color, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub handle: &'a str,
    pub theme_mode: ThemeMode,
    pub colors: &'a ColorScheme,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectLanguage(LanguageIdentifier),
    SelectTheme(ThemeMode),
    /// A section link, the handle or "Hire Me" was pressed.
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeChanged(ThemeMode),
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
///
/// Re-selecting the active language or theme yields [`Event::None`].
pub fn update(message: Message, current_locale: &LanguageIdentifier, theme_mode: ThemeMode) -> Event {
    match message {
        Message::SelectLanguage(locale) if &locale != current_locale => Event::LanguageChanged(locale),
        Message::SelectTheme(mode) if mode != theme_mode => Event::ThemeChanged(mode),
        Message::SelectLanguage(_) | Message::SelectTheme(_) => Event::None,
        Message::Navigate(section) => Event::ScrollTo(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let brand = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(icons::code(), sizing::ICON_MD, colors.brand_primary))
            .push(
                Text::new(ctx.handle.to_string())
                    .size(typography::TITLE_SM)
                    .color(colors.text_primary),
            ),
    )
    .padding(0)
    .on_press(Message::Navigate(Section::Home))
    .style(button::text);

    let primary = colors.text_primary;
    let secondary = colors.text_secondary;
    let links = Section::LINKS
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, section| {
            row.push(
                button(Text::new(ctx.i18n.tr(section.nav_key())).size(typography::BODY))
                    .padding(spacing::XXS)
                    .on_press(Message::Navigate(section))
                    .style(move |_theme: &Theme, status| link_style(primary, secondary, status)),
            )
        });

    let hire_me = toggle(
        ctx.i18n.tr("nav-hire-me"),
        true,
        colors,
        Message::Navigate(Section::Contact),
    );

    let languages = ctx.i18n.available_locales.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center).push(icons::tinted(
            icons::globe(),
            sizing::ICON_SM,
            colors.text_secondary,
        )),
        |row, locale| {
            let selected = locale == ctx.i18n.current_locale();
            let label = ctx.i18n.tr(&format!("language-name-{locale}"));
            row.push(toggle(label, selected, colors, Message::SelectLanguage(locale.clone())))
        },
    );

    let themes = [
        (ThemeMode::Light, "nav-theme-light"),
        (ThemeMode::Dark, "nav-theme-dark"),
        (ThemeMode::System, "nav-theme-system"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XXS), |row, (mode, key)| {
        row.push(toggle(
            ctx.i18n.tr(key),
            mode == ctx.theme_mode,
            colors,
            Message::SelectTheme(mode),
        ))
    });

    let surface = colors.surface_card;
    let border_color = colors.border;
    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(links)
            .push(Space::new().width(Length::Fill))
            .push(languages)
            .push(themes)
            .push(hire_me),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .style(move |_theme: &Theme| bar_style(surface, border_color))
    .into()
}

/// Small pill button, highlighted when selected.
fn toggle<'a>(label: String, selected: bool, colors: &ColorScheme, message: Message) -> Element<'a, Message> {
    let accent = colors.brand_soft;
    let text_color = if selected {
        colors.brand_primary
    } else {
        colors.text_secondary
    };

    button(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .on_press(message)
        .style(move |_theme: &Theme, status| toggle_style(selected, accent, text_color, status))
        .into()
}

fn toggle_style(selected: bool, accent: Color, text_color: Color, status: button::Status) -> button::Style {
    let highlighted = selected || matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: highlighted.then_some(Background::Color(accent)),
        text_color,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn link_style(primary: Color, secondary: Color, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => primary,
        button::Status::Active | button::Status::Disabled => secondary,
    };
    button::Style {
        text_color,
        ..Default::default()
    }
}

fn bar_style(surface: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface)),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
