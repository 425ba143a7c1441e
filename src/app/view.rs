// SPDX-License-Identifier: MPL-2.0
//! Page composition: navbar, scrollable sections, footer and toast overlay.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::sections::{self, about, contact, experience, hero, projects, skills, PAGE_SCROLLABLE_ID};
use crate::ui::theming::ColorScheme;
use crate::ui::toast;
use iced::widget::{container, scrollable, Column, Container, Id, Stack, Text};
use iced::{Background, Element, Length, Theme};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let colors = ColorScheme::for_mode(app.theme_mode);
    let ctx = sections::ViewContext {
        i18n: &app.i18n,
        content: &app.content,
        colors: &colors,
    };

    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        handle: &app.content.profile.handle,
        theme_mode: app.theme_mode,
        colors: &colors,
    })
    .map(Message::Navbar);

    let contact = contact::view(
        ctx,
        contact::FormView {
            form: &app.form,
            editor: &app.editor,
        },
    )
    .map(Message::Contact);

    let footer = Container::new(
        Text::new(
            app.i18n
                .tr_with_args("footer-copyright", &[("name", app.content.profile.handle.as_str())]),
        )
        .size(typography::CAPTION)
        .color(colors.text_secondary),
    )
    .center_x(Length::Fill)
    .padding(spacing::LG);

    let sections = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero::view(ctx).map(Message::ScrollTo))
        .push(about::view(ctx))
        .push(skills::view(ctx))
        .push(projects::view(ctx))
        .push(experience::view(ctx))
        .push(contact)
        .push(footer);

    let background = colors.surface_primary;
    let page = Container::new(
        Column::new()
            .push(navbar)
            .push(
                scrollable(Container::new(sections).center_x(Length::Fill))
                    .id(Id::new(PAGE_SCROLLABLE_ID))
                    .height(Length::Fill),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    });

    match app.toasts.current() {
        Some(current) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(toast::view(current, &app.i18n, &colors).map(Message::ToastView))
            .into(),
        None => page.into(),
    }
}
