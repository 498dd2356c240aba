// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: top bar above the stage and filmstrip, with the detail
//! panel on the right. A spinner covers the window while loading.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::gallery::{self, PreviewCache};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{detail_panel, filmstrip, stage, topbar};
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Stack, Text},
    Background, Color, Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub previews: &'a PreviewCache,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selected_name = ctx.gallery.selected().map(|d| d.file_name.as_str());

    let stage = stage::view(stage::ViewContext {
        i18n: ctx.i18n,
        previews: ctx.previews,
        selected: selected_name,
        displayed_count: ctx.gallery.displayed_count(),
    });

    let filmstrip = filmstrip::view(filmstrip::ViewContext {
        i18n: ctx.i18n,
        images: ctx.gallery.images(),
        selected: selected_name,
        previews: ctx.previews,
        expanded: ctx.gallery.layout_expanded(),
    })
    .map(Message::Filmstrip);

    let details = detail_panel::view(detail_panel::ViewContext {
        i18n: ctx.i18n,
        selected: ctx.gallery.selected(),
    })
    .map(Message::DetailPanel);

    let body = Row::new()
        .push(
            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(stage)
                .push(filmstrip),
        )
        .push(details)
        .height(Length::Fill);

    let content: Element<'_, Message> = Column::new()
        .push(topbar::view(topbar::ViewContext { i18n: ctx.i18n }))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    if !ctx.gallery.is_loading() {
        return content;
    }

    Stack::new()
        .push(content)
        .push(loading_overlay(ctx.i18n, ctx.spinner_rotation))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loading_overlay<'a>(i18n: &I18n, rotation: f32) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element())
        .push(
            Text::new(i18n.tr("gallery-loading"))
                .size(typography::BODY_LG)
                .color(palette::WHITE),
        );

    Container::new(content)
        .center(Length::Fill)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        })
        .into()
}
