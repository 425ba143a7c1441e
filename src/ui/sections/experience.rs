// SPDX-License-Identifier: MPL-2.0
//! Experience timeline.

use super::{card, section, ViewContext};
use crate::content::Experience;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Row, Text};
use iced::{alignment::Vertical, Element};

pub fn view<'a, M: 'a>(ctx: ViewContext<'_>) -> Element<'a, M> {
    let timeline = ctx
        .content
        .experience
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, item| {
            column.push(entry(item, ctx.colors))
        });

    section(
        ctx,
        "section-experience-title",
        Some("section-experience-desc"),
        card(timeline, ctx.colors).into(),
    )
}

fn entry<'a, M: 'a>(item: &Experience, colors: &ColorScheme) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Top)
        .push(icons::tinted(icons::briefcase(), sizing::ICON_MD, colors.brand_primary))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(item.period.clone())
                        .size(typography::CAPTION)
                        .color(colors.text_secondary),
                )
                .push(
                    Text::new(item.title.clone())
                        .size(typography::TITLE_SM)
                        .color(colors.text_primary),
                )
                .push(
                    Text::new(item.description.clone())
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                ),
        )
        .into()
}
