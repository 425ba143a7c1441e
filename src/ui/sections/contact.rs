// SPDX-License-Identifier: MPL-2.0
//! Contact section: pitch, GitHub link and the quick message form.

use super::{card, section, ViewContext};
use crate::contact::{ContactForm, Field};
use crate::ui::design_tokens::{border, opacity, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Color, Element, Length, Theme};

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
}

/// Form inputs. The message body lives in a multi-line editor whose text is
/// mirrored into the [`ContactForm`] on every edit.
pub struct FormView<'a> {
    pub form: &'a ContactForm,
    pub editor: &'a text_editor::Content,
}

pub fn view<'a>(ctx: ViewContext<'_>, form: FormView<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let pitch = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            Text::new(ctx.content.profile.contact_pitch.clone())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::tinted(icons::globe(), sizing::ICON_SM, colors.text_secondary))
                .push(
                    Text::new(ctx.i18n.tr("contact-github-label"))
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                )
                .push(
                    Text::new(ctx.content.profile.github_url.clone())
                        .size(typography::BODY)
                        .color(colors.brand_primary),
                ),
        );

    let body = Row::new()
        .spacing(spacing::LG)
        .push(pitch)
        .push(form_panel(ctx, form));

    section(
        ctx,
        "section-contact-title",
        Some("section-contact-desc"),
        card(body, colors).into(),
    )
}

fn form_panel<'a>(ctx: ViewContext<'_>, view: FormView<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let i18n = ctx.i18n;

    let heading = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(icons::mail(), sizing::ICON_SM, colors.brand_primary))
        .push(
            Text::new(i18n.tr("contact-quick-message"))
                .size(typography::TITLE_SM)
                .color(colors.text_primary),
        );

    let input_colors = InputColors::from(colors);

    let name = text_input(&i18n.tr("contact-placeholder-name"), view.form.get(Field::Name))
        .on_input(Message::NameChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(move |_theme, status| input_style(input_colors, status));

    let email = text_input(&i18n.tr("contact-placeholder-email"), view.form.get(Field::Email))
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(move |_theme, status| input_style(input_colors, status));

    let message = text_editor(view.editor)
        .placeholder(i18n.tr("contact-placeholder-message"))
        .on_action(Message::MessageEdited)
        .height(Length::Fixed(sizing::TEXTAREA_HEIGHT))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(move |theme, status| editor_style(theme, input_colors, status));

    let submit = button(
        Container::new(Text::new(i18n.tr("contact-submit")).size(typography::BODY))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .on_press(Message::Submit)
    .style(move |_theme, status| submit_style(input_colors.accent, status));

    let surface = colors.backdrop;
    let border_color = colors.border;
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(name)
            .push(email)
            .push(message)
            .push(submit),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(move |_theme: &Theme| panel_style(surface, border_color))
    .into()
}

/// Colors shared by the form inputs.
#[derive(Debug, Clone, Copy)]
struct InputColors {
    text: Color,
    placeholder: Color,
    border: Color,
    accent: Color,
}

impl From<&ColorScheme> for InputColors {
    fn from(colors: &ColorScheme) -> Self {
        Self {
            text: colors.text_primary,
            placeholder: colors.text_secondary,
            border: colors.border,
            accent: colors.brand_primary,
        }
    }
}

fn input_border(colors: InputColors, focused: bool) -> iced::Border {
    iced::Border {
        color: if focused { colors.accent } else { colors.border },
        width: border::WIDTH_SM,
        radius: radius::LG.into(),
    }
}

fn input_style(colors: InputColors, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: input_border(colors, focused),
        icon: colors.placeholder,
        placeholder: colors.placeholder,
        value: colors.text,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.accent
        },
    }
}

fn editor_style(theme: &Theme, colors: InputColors, status: text_editor::Status) -> text_editor::Style {
    let focused = matches!(status, text_editor::Status::Focused { .. });
    let mut style = text_editor::default(theme, status);
    style.background = Background::Color(Color::TRANSPARENT);
    style.border = input_border(colors, focused);
    style.placeholder = colors.placeholder;
    style.value = colors.text;
    style.selection = Color {
        a: opacity::OVERLAY_MEDIUM,
        ..colors.accent
    };
    style
}

fn submit_style(accent: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..accent
        },
        button::Status::Active | button::Status::Disabled => accent,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::BLACK,
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn panel_style(surface: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface)),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> InputColors {
        InputColors::from(&ColorScheme::dark())
    }

    #[test]
    fn focused_input_uses_accent_border() {
        let style = input_style(colors(), text_input::Status::Focused { is_hovered: false });
        assert_eq!(style.border.color, colors().accent);

        let style = input_style(colors(), text_input::Status::Active);
        assert_eq!(style.border.color, colors().border);
    }

    #[test]
    fn submit_button_is_filled_with_accent() {
        let style = submit_style(colors().accent, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(colors().accent)));
    }
}
