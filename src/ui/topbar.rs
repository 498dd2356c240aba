// SPDX-License-Identifier: MPL-2.0
//! Top bar with the application logo and the welcome text.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the top bar. It has no interactive element.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo = icons::sized(icons::logo(), sizing::ICON_LG);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(logo)
        .push(Text::new(ctx.i18n.tr("topbar-welcome")).size(typography::TITLE_MD));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOPBAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::topbar)
        .into()
}
