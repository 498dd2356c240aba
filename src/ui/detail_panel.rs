// SPDX-License-Identifier: MPL-2.0
//! "About Image" side panel.
//!
//! Lists the EXIF detail fields of the selected image, each resolved through
//! its fallback chain, and offers the download button. Rows whose value
//! cannot be resolved show "Not Available".

use crate::app::i18n::fluent::I18n;
use crate::gallery::exif;
use crate::gallery::ImageDescriptor;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, rule, scrollable, Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Option<&'a ImageDescriptor>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Download,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("detail-panel-title")).size(typography::TITLE_SM);

    let not_available = ctx.i18n.tr("detail-not-available");
    let rows = exif::resolve_all(ctx.selected).into_iter().fold(
        Column::new().spacing(spacing::XS),
        |rows, (field, value)| {
            rows.push(detail_row(
                ctx.i18n.tr(field.label_key),
                value.unwrap_or_else(|| not_available.clone()),
            ))
        },
    );

    let download = button(
        Text::new(ctx.i18n.tr("download-button"))
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press(Message::Download)
    .style(styles::button::primary);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title)
        .push(rule::horizontal(1))
        .push(rows)
        .push(download);

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn detail_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Top)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(value)
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .into()
}
