// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The gallery controller stays synchronous; the handlers here turn the
//! [`Effect`]s it returns into iced tasks (preview fetches, filmstrip
//! scrolling, downloads) and feed the results back as messages.

use super::Message;
use crate::gallery::{self, Effect, PreviewCache};
use crate::remote::GalleryClient;
use crate::ui::widgets::animated_spinner;
use crate::ui::{detail_panel, filmstrip};
use iced::widget::image::Handle;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::{Path, PathBuf};

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub previews: &'a mut PreviewCache,
    pub client: Option<&'a GalleryClient>,
    pub download_dir: Option<&'a Path>,
    pub spinner_rotation: &'a mut f32,
    pub filmstrip_metrics: &'a mut Option<filmstrip::Metrics>,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.update(message);
    apply_effect(ctx, effect)
}

pub fn handle_filmstrip_message(
    ctx: &mut UpdateContext<'_>,
    message: filmstrip::Message,
) -> Task<Message> {
    match message {
        filmstrip::Message::Select(file_name) => {
            handle_gallery_message(ctx, gallery::Message::Select(file_name))
        }
        filmstrip::Message::ToggleLayout => {
            // The thumbnail row is rebuilt on expand and reports fresh metrics.
            *ctx.filmstrip_metrics = None;
            handle_gallery_message(ctx, gallery::Message::ToggleLayout)
        }
        filmstrip::Message::Scrolled(metrics) => {
            *ctx.filmstrip_metrics = Some(metrics);
            Task::none()
        }
    }
}

pub fn handle_detail_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: detail_panel::Message,
) -> Task<Message> {
    match message {
        detail_panel::Message::Download => {
            handle_gallery_message(ctx, gallery::Message::Download)
        }
    }
}

pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    file_name: &str,
    result: Result<Vec<u8>, crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(bytes) => ctx
            .previews
            .complete(file_name, Some(Handle::from_bytes(bytes))),
        Err(err) => {
            log::warn!("Error fetching preview of {file_name}: {err}");
            ctx.previews.complete(file_name, None);
        }
    }
    Task::none()
}

pub fn handle_download_completed(result: Result<PathBuf, crate::error::Error>) -> Task<Message> {
    match result {
        Ok(path) => log::info!("Downloaded image to {}", path.display()),
        Err(err) => log::error!("Error downloading image: {err}"),
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.spinner_rotation = animated_spinner::next_rotation(*ctx.spinner_rotation);
    Task::none()
}

fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Prefetch { around } => request_previews(ctx, around),
        Effect::Selected {
            index,
            scroll_into_view,
        } => {
            let previews = request_previews(ctx, index);
            if scroll_into_view {
                Task::batch([previews, scroll_filmstrip(ctx, index)])
            } else {
                previews
            }
        }
        Effect::Download { file_name } => start_download(ctx, file_name),
    }
}

/// Starts preview fetches for the cache window around `around`, the
/// selected image first.
fn request_previews(ctx: &mut UpdateContext<'_>, around: usize) -> Task<Message> {
    let Some(client) = ctx.client else {
        return Task::none();
    };

    let images = ctx.gallery.images();
    let window = ctx.previews.window(around, images.len());
    let order = std::iter::once(around).chain(window.filter(|&index| index != around));

    let mut tasks = Vec::new();
    for index in order {
        let Some(descriptor) = images.get(index) else {
            continue;
        };
        if !ctx.previews.request(&descriptor.file_name) {
            continue;
        }
        let client = client.clone();
        let file_name = descriptor.file_name.clone();
        tasks.push(Task::perform(
            async move {
                let result = client.fetch_preview(&file_name).await;
                (file_name, result)
            },
            |(file_name, result)| Message::PreviewLoaded { file_name, result },
        ));
    }

    Task::batch(tasks)
}

fn scroll_filmstrip(ctx: &UpdateContext<'_>, index: usize) -> Task<Message> {
    let offset = filmstrip::centered_offset(
        index,
        ctx.gallery.images().len(),
        *ctx.filmstrip_metrics,
    );
    operation::snap_to(Id::new(filmstrip::FILMSTRIP_ID), offset)
}

fn start_download(ctx: &UpdateContext<'_>, file_name: String) -> Task<Message> {
    let Some(client) = ctx.client.cloned() else {
        log::error!("Error downloading image: no gallery service configured");
        return Task::none();
    };
    let Some(directory) = ctx.download_dir.map(Path::to_path_buf) else {
        log::error!("Error downloading image: no download directory available");
        return Task::none();
    };

    log::debug!("Downloading {file_name} to {}", directory.display());
    Task::perform(
        async move { client.download_to(&file_name, &directory).await },
        Message::DownloadCompleted,
    )
}
