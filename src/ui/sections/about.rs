// SPDX-License-Identifier: MPL-2.0
use super::{card, section, ViewContext};
use crate::ui::design_tokens::typography;
use iced::widget::Text;
use iced::Element;

pub fn view<'a, M: 'a>(ctx: ViewContext<'_>) -> Element<'a, M> {
    let body = Text::new(ctx.content.profile.about.clone())
        .size(typography::BODY_LG)
        .color(ctx.colors.text_secondary);

    section(
        ctx,
        "section-about-title",
        Some("section-about-desc"),
        card(body, ctx.colors).into(),
    )
}
