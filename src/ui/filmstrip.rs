// SPDX-License-Identifier: MPL-2.0
//! Filmstrip: the info strip with the layout toggle and, when expanded, the
//! horizontal row of thumbnails.
//!
//! The thumbnail row lives in a scrollable identified by [`FILMSTRIP_ID`] so
//! the application can bring the selected thumbnail into view with
//! [`centered_offset`].

use crate::app::i18n::fluent::I18n;
use crate::gallery::{ImageDescriptor, PreviewCache, PreviewEntry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, image,
        scrollable::{Direction, RelativeOffset, Scrollbar, Viewport},
        tooltip, Column, Container, Id, Row, Scrollable, Space, Text,
    },
    ContentFit, Element, Length,
};

/// Identifier of the thumbnail scrollable.
pub const FILMSTRIP_ID: &str = "filmstrip";

const STRIP_PADDING: f32 = spacing::XS;
const THUMBNAIL_GAP: f32 = spacing::XS;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a [ImageDescriptor],
    pub selected: Option<&'a str>,
    pub previews: &'a PreviewCache,
    pub expanded: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    Select(String),
    /// The expand/collapse control was clicked.
    ToggleLayout,
    /// The thumbnail row scrolled or was resized.
    Scrolled(Metrics),
}

/// Visible and total width of the thumbnail row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub viewport_width: f32,
    pub content_width: f32,
}

impl From<Viewport> for Metrics {
    fn from(viewport: Viewport) -> Self {
        Self {
            viewport_width: viewport.bounds().width,
            content_width: viewport.content_bounds().width,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let strip = info_strip(&ctx);

    if !ctx.expanded {
        return strip;
    }

    Column::new().push(strip).push(thumbnails(&ctx)).into()
}

/// Arrow shown on the layout toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Down,
    Up,
}

impl Arrow {
    fn icon(self) -> iced::widget::svg::Svg<'static> {
        match self {
            Arrow::Down => icons::down_arrow(),
            Arrow::Up => icons::up_arrow(),
        }
    }
}

/// What the info strip shows for a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoStripContent {
    pub counter_key: &'static str,
    pub arrow: Arrow,
    pub tooltip_key: &'static str,
}

#[must_use]
pub fn info_strip_content(expanded: bool) -> InfoStripContent {
    if expanded {
        InfoStripContent {
            counter_key: "filmstrip-in-view-expanded",
            arrow: Arrow::Down,
            tooltip_key: "filmstrip-collapse-tooltip",
        }
    } else {
        InfoStripContent {
            counter_key: "filmstrip-in-view-collapsed",
            arrow: Arrow::Up,
            tooltip_key: "filmstrip-expand-tooltip",
        }
    }
}

fn info_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let InfoStripContent {
        counter_key,
        arrow,
        tooltip_key,
    } = info_strip_content(ctx.expanded);

    let selected = ctx.i18n.tr_with_args(
        "filmstrip-selected",
        &[("file_name", ctx.selected.unwrap_or_default())],
    );

    let toggle = tooltip(
        button(icons::themed(icons::sized(arrow.icon(), sizing::ICON_MD)))
            .on_press(Message::ToggleLayout)
            .padding(spacing::XXS)
            .style(styles::button::icon),
        Text::new(ctx.i18n.tr(tooltip_key)).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS)
    .padding(spacing::XS)
    .style(styles::container::tooltip);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr(counter_key)).size(typography::BODY))
        .push(icons::themed(icons::sized(icons::right_arrow(), sizing::ICON_SM)))
        .push(Text::new(selected).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::container::info_strip)
        .into()
}

fn thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = ctx
        .images
        .iter()
        .fold(
            Row::new().spacing(THUMBNAIL_GAP).padding(STRIP_PADDING),
            |row, descriptor| {
                let selected = ctx.selected == Some(descriptor.file_name.as_str());
                row.push(thumbnail(descriptor, ctx.previews, selected))
            },
        );

    Scrollable::new(row)
        .id(Id::new(FILMSTRIP_ID))
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.into()))
        .into()
}

fn thumbnail<'a>(
    descriptor: &'a ImageDescriptor,
    previews: &'a PreviewCache,
    selected: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match previews.entry(&descriptor.file_name) {
        Some(PreviewEntry::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => icons::themed(icons::sized(icons::image_placeholder(), sizing::ICON_MD)).into(),
    };

    let frame = Container::new(picture)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    button(frame)
        .padding(0)
        .on_press(Message::Select(descriptor.file_name.clone()))
        .style(styles::button::thumbnail(selected))
        .into()
}

/// Horizontal offset that centers thumbnail `index` out of `count`.
///
/// With known metrics the thumbnail center is placed at the middle of the
/// viewport, clamped to the scrollable range. Before the row has reported
/// its size the offset is proportional to the index.
#[must_use]
pub fn centered_offset(index: usize, count: usize, metrics: Option<Metrics>) -> RelativeOffset {
    if count <= 1 {
        return RelativeOffset { x: 0.0, y: 0.0 };
    }

    #[allow(clippy::cast_precision_loss)]
    let x = match metrics {
        Some(metrics) if metrics.viewport_width > 0.0 => {
            let scrollable = metrics.content_width - metrics.viewport_width;
            if scrollable <= 0.0 {
                0.0
            } else {
                let center = STRIP_PADDING
                    + index as f32 * (sizing::THUMBNAIL_WIDTH + THUMBNAIL_GAP)
                    + sizing::THUMBNAIL_WIDTH / 2.0;
                (center - metrics.viewport_width / 2.0) / scrollable
            }
        }
        _ => index.min(count - 1) as f32 / (count - 1) as f32,
    };

    RelativeOffset {
        x: x.clamp(0.0, 1.0),
        y: 0.0,
    }
}
