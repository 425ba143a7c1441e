// SPDX-License-Identifier: MPL-2.0
//! Page sections, rendered top to bottom.
//!
//! Every section is a pure function of a [`ViewContext`]. The hero emits
//! the [`Section`] its buttons point at, the contact section emits form
//! messages, and the others are generic over the message type.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::content::Content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Color, Element, Length, Theme};

/// ID of the scrollable holding the page.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// A navigation target on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Stack,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Sections linked from the navbar, in page order.
    pub const LINKS: [Section; 5] = [
        Section::About,
        Section::Stack,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Navbar label key.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Stack => "nav-stack",
            Section::Projects => "nav-projects",
            Section::Experience => "nav-experience",
            Section::Contact => "nav-contact",
        }
    }

    /// Vertical position of the section start as a fraction of the page's
    /// scroll range. Contact sits at the bottom together with the footer.
    #[must_use]
    pub fn anchor(self) -> RelativeOffset {
        let y = match self {
            Section::Home => 0.0,
            Section::About => 0.2,
            Section::Stack => 0.34,
            Section::Projects => 0.55,
            Section::Experience => 0.8,
            Section::Contact => 1.0,
        };
        RelativeOffset { x: 0.0, y }
    }
}

/// Contextual data needed to render a section.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a Content,
    pub colors: &'a ColorScheme,
}

/// Section heading: title with an accent dot, optional description, then body.
pub fn section<'a, M: 'a>(
    ctx: ViewContext<'_>,
    title_key: &str,
    desc_key: Option<&str>,
    body: Element<'a, M>,
) -> Element<'a, M> {
    let title = Row::new()
        .align_y(Vertical::Bottom)
        .push(
            Text::new(ctx.i18n.tr(title_key))
                .size(typography::TITLE_LG)
                .color(ctx.colors.text_primary),
        )
        .push(
            Text::new(".")
                .size(typography::TITLE_LG)
                .color(ctx.colors.brand_primary),
        );

    let mut heading = Column::new().spacing(spacing::XS).push(title);
    if let Some(key) = desc_key {
        heading = heading.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary),
        );
    }

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .push(heading)
        .push(body)
        .into()
}

/// Translucent bordered card.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>, colors: &ColorScheme) -> Container<'a, M> {
    let surface = colors.surface_card;
    let border_color = colors.border;
    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(move |_theme: &Theme| card_style(surface, border_color))
}

/// Small rounded label, used for badges and project tags.
pub fn chip<'a, M: 'a>(label: &str, colors: &ColorScheme) -> Element<'a, M> {
    let background = colors.brand_soft;
    let border_color = colors.border;
    Container::new(
        Text::new(label.to_string())
            .size(typography::CAPTION)
            .color(colors.text_primary),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(move |_theme: &Theme| chip_style(background, border_color))
    .into()
}

pub(crate) fn card_style(surface: Color, border_color: Color) -> container::Style {
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

pub(crate) fn chip_style(background: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_follow_page_order() {
        let order = [
            Section::Home,
            Section::About,
            Section::Stack,
            Section::Projects,
            Section::Experience,
            Section::Contact,
        ];
        let offsets: Vec<f32> = order.iter().map(|section| section.anchor().y).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(offsets.first(), Some(&0.0));
        assert_eq!(offsets.last(), Some(&1.0));
    }

    #[test]
    fn every_link_has_a_translation() {
        let i18n = I18n::default();
        for section in Section::LINKS.into_iter().chain([Section::Home]) {
            assert!(!i18n.tr(section.nav_key()).starts_with("MISSING"));
        }
    }

    #[test]
    fn card_style_has_border_and_surface() {
        let colors = ColorScheme::dark();
        let style = card_style(colors.surface_card, colors.border);
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert_eq!(style.background, Some(Background::Color(colors.surface_card)));
    }

    #[test]
    fn chip_style_is_pill_shaped() {
        let colors = ColorScheme::light();
        let style = chip_style(colors.brand_soft, colors.border);
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
    }
}
