// SPDX-License-Identifier: MPL-2.0
//! Project cards with tags and links.

use super::{card, chip, section, ViewContext};
use crate::content::Project;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

pub fn view<'a, M: 'a>(ctx: ViewContext<'_>) -> Element<'a, M> {
    let cards = ctx
        .content
        .projects
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, project| {
            row.push(project_card(project, ctx.i18n, ctx.colors))
        });

    section(
        ctx,
        "section-projects-title",
        Some("section-projects-desc"),
        cards.into(),
    )
}

fn project_card<'a, M: 'a>(project: &Project, i18n: &I18n, colors: &ColorScheme) -> Element<'a, M> {
    let tags = project
        .tags
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            row.push(chip(tag, colors))
        })
        .wrap();

    let links = [
        ("project-github", project.github.as_deref()),
        ("project-demo", project.demo.as_deref()),
    ]
    .into_iter()
    .filter_map(|(key, url)| url.map(|url| (key, url)))
    .fold(Column::new().spacing(spacing::XXS), |column, (key, url)| {
        column.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::tinted(icons::link(), sizing::ICON_SM, colors.brand_primary))
                .push(
                    Text::new(format!("{}: {url}", i18n.tr(key)))
                        .size(typography::CAPTION)
                        .color(colors.brand_primary),
                ),
        )
    });

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(project.title.clone())
                .size(typography::TITLE_SM)
                .color(colors.text_primary),
        )
        .push(
            Text::new(project.description.clone())
                .size(typography::BODY)
                .color(colors.text_secondary)
                .height(Length::Fill),
        )
        .push(tags)
        .push(links);

    card(inner, colors).into()
}
