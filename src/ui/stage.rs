// SPDX-License-Identifier: MPL-2.0
//! Main preview area: photo count and the selected image.

use crate::app::i18n::fluent::I18n;
use crate::gallery::{PreviewCache, PreviewEntry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{image, Column, Container, Space, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub previews: &'a PreviewCache,
    /// File name of the selected image, if any.
    pub selected: Option<&'a str>,
    /// Value of the "Showing N photos" label.
    pub displayed_count: i64,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.displayed_count.to_string();
    let label = Text::new(
        ctx.i18n
            .tr_with_args("gallery-photo-count", &[("count", count.as_str())]),
    )
    .size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(label)
        .push(preview(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::stage)
        .into()
}

fn preview<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // An empty catalog shows an empty stage.
    let Some(file_name) = ctx.selected else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };

    let picture: Element<'a, Message> = match ctx.previews.entry(file_name) {
        Some(PreviewEntry::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => icons::themed(icons::sized(icons::image_placeholder(), sizing::ICON_XL)).into(),
    };

    Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
