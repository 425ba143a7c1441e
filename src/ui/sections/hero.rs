// SPDX-License-Identifier: MPL-2.0
//! Hero: role, headline, tagline, tech badges and the profile card.
//!
//! The buttons jump to other sections, so the hero emits the target
//! [`Section`] as its message.

use super::{card, chip, Section, ViewContext};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Color, Element, Length, Theme};

/// Look of a hero button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// White fill, dark label.
    Solid,
    /// Transparent with a thin border.
    Outline,
    /// Violet fill.
    Accent,
}

pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Section> {
    Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(intro(ctx))
        .push(profile_card(ctx))
        .into()
}

fn intro<'a>(ctx: ViewContext<'_>) -> Element<'a, Section> {
    let profile = &ctx.content.profile;
    let colors = ctx.colors;

    let badges = profile
        .badges
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, badge| {
            row.push(chip(badge, colors))
        })
        .wrap();

    let github = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(icons::link(), sizing::ICON_SM, colors.brand_primary))
        .push(
            Text::new(format!("{}: {}", ctx.i18n.tr("hero-github"), profile.github_url))
                .size(typography::BODY)
                .color(colors.brand_primary),
        );

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(action(
            ctx.i18n.tr("hero-view-projects"),
            Section::Projects,
            Variant::Solid,
            colors,
        ))
        .push(action(
            ctx.i18n.tr("hero-contact-me"),
            Section::Contact,
            Variant::Outline,
            colors,
        ))
        .wrap();

    Column::new()
        .width(Length::FillPortion(3))
        .spacing(spacing::MD)
        .push(
            Text::new(profile.role.clone())
                .size(typography::BODY)
                .color(colors.brand_primary),
        )
        .push(
            Text::new(profile.headline.clone())
                .size(typography::DISPLAY)
                .color(colors.text_primary),
        )
        .push(
            Text::new(profile.tagline.clone())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        )
        .push(actions)
        .push(github)
        .push(badges)
        .into()
}

fn profile_card<'a>(ctx: ViewContext<'_>) -> Element<'a, Section> {
    let profile = &ctx.content.profile;
    let colors = ctx.colors;

    let facts = profile.facts.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, fact| {
            column.push(
                Row::new()
                    .push(
                        Text::new(fact.label.clone())
                            .size(typography::BODY)
                            .color(colors.text_secondary)
                            .width(Length::Fill),
                    )
                    .push(
                        Text::new(fact.value.clone())
                            .size(typography::BODY)
                            .color(colors.text_primary),
                    ),
            )
        },
    );

    let inner = Column::new()
        .spacing(spacing::LG)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(profile.full_name.clone())
                        .size(typography::TITLE_MD)
                        .color(colors.text_primary),
                )
                .push(
                    Text::new(profile.location.clone())
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                ),
        )
        .push(facts)
        .push(
            Container::new(action(ctx.i18n.tr("hero-cta"), Section::Contact, Variant::Accent, colors))
                .center_x(Length::Fill),
        );

    card(inner, colors).width(Length::FillPortion(2)).into()
}

fn action<'a>(label: String, target: Section, variant: Variant, colors: &ColorScheme) -> Button<'a, Section> {
    let border_color = colors.border;
    let text_color = colors.text_primary;
    button(Text::new(label).size(typography::BODY))
    .padding([spacing::SM, spacing::LG])
    .on_press(target)
    .style(move |_theme: &Theme, status| action_style(variant, border_color, text_color, status))
}

fn action_style(
    variant: Variant,
    border_color: Color,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    let (background, label, edge) = match variant {
        Variant::Solid => (
            Some(if hovered { palette::ZINC_200 } else { palette::WHITE }),
            palette::BLACK,
            border_color,
        ),
        Variant::Outline => (
            hovered.then_some(Color {
                a: opacity::TINT,
                ..text_color
            }),
            text_color,
            border_color,
        ),
        Variant::Accent => (
            Some(if hovered { palette::VIOLET_400 } else { palette::VIOLET_500 }),
            palette::BLACK,
            Color::TRANSPARENT,
        ),
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: label,
        border: iced::Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::i18n::fluent::I18n;

    #[test]
    fn hero_renders() {
        let i18n = I18n::default();
        let content = Content::load().unwrap();
        let colors = ColorScheme::dark();
        let _element = view(ViewContext {
            i18n: &i18n,
            content: &content,
            colors: &colors,
        });
    }

    #[test]
    fn solid_button_darkens_on_hover() {
        let active = action_style(Variant::Solid, Color::BLACK, Color::WHITE, button::Status::Active);
        let hovered = action_style(Variant::Solid, Color::BLACK, Color::WHITE, button::Status::Hovered);
        assert_eq!(active.background, Some(Background::Color(palette::WHITE)));
        assert_eq!(hovered.background, Some(Background::Color(palette::ZINC_200)));
    }

    #[test]
    fn outline_button_is_transparent_at_rest() {
        let style = action_style(Variant::Outline, Color::BLACK, Color::WHITE, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn accent_button_uses_violet() {
        let style = action_style(Variant::Accent, Color::BLACK, Color::WHITE, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::VIOLET_500)));
    }
}
