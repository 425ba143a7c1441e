// SPDX-License-Identifier: MPL-2.0
//! Tech stack grouped by area, two groups per row.

use super::{card, chip, section, ViewContext};
use crate::content::TechGroup;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

const GROUPS_PER_ROW: usize = 2;

pub fn view<'a, M: 'a>(ctx: ViewContext<'_>) -> Element<'a, M> {
    let grid = ctx
        .content
        .tech_groups
        .chunks(GROUPS_PER_ROW)
        .fold(Column::new().spacing(spacing::MD), |column, chunk| {
            let mut row = Row::new().spacing(spacing::MD);
            for group in chunk {
                row = row.push(group_card(group, ctx.colors));
            }
            // Keep a lone last group at half width.
            for _ in chunk.len()..GROUPS_PER_ROW {
                row = row.push(Space::new().width(Length::Fill));
            }
            column.push(row)
        });

    section(ctx, "section-stack-title", Some("section-stack-desc"), grid.into())
}

fn group_card<'a, M: 'a>(group: &TechGroup, colors: &ColorScheme) -> Element<'a, M> {
    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(icons::code(), sizing::ICON_SM, colors.brand_primary))
        .push(
            Text::new(group.title.clone())
                .size(typography::TITLE_SM)
                .color(colors.text_primary),
        );

    let items = group
        .items
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, item| {
            row.push(chip(item, colors))
        })
        .wrap();

    card(Column::new().spacing(spacing::SM).push(title).push(items), colors).into()
}
