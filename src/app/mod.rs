// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery controller, the preview
//! cache, the service client and localization. It translates messages into
//! side effects such as catalog, preview and download requests.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::{Error, HttpError};
use crate::gallery::{self, PreviewCache};
use crate::remote::GalleryClient;
use crate::ui::filmstrip;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    previews: PreviewCache,
    /// `None` when the configured service address is unusable.
    client: Option<GalleryClient>,
    download_dir: Option<PathBuf>,
    /// Resolved once at startup; system detection may block.
    theme: Theme,
    spinner_rotation: f32,
    /// Last reported size of the thumbnail row, used to center selections.
    filmstrip_metrics: Option<filmstrip::Metrics>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.images().len())
            .field("loading", &self.gallery.is_loading())
            .field("base_url", &self.client.as_ref().map(|c| c.base_url().as_str()))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::default(),
            previews: PreviewCache::default(),
            client: None,
            download_dir: None,
            theme: Theme::Dark,
            spinner_rotation: 0.0,
            filmstrip_metrics: None,
        }
    }
}

impl App {
    /// Initializes application state from the config and CLI flags and
    /// starts the one-time catalog fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let base_url = flags
            .base_url
            .clone()
            .unwrap_or_else(|| config.base_url().to_string());
        let client = match GalleryClient::new(&base_url) {
            Ok(client) => Some(client),
            Err(err) => {
                log::error!("Unusable gallery service address: {err}");
                None
            }
        };

        let expanded = config
            .display
            .filmstrip_expanded
            .unwrap_or(config::DEFAULT_FILMSTRIP_EXPANDED);

        let app = App {
            i18n,
            gallery: gallery::State::new(expanded),
            previews: PreviewCache::new(config.preview_cache_size()),
            client,
            download_dir: paths::get_download_dir(config.download.directory.clone()),
            theme: config.general.theme_mode.to_iced_theme(),
            ..Self::default()
        };

        let task = app.load_catalog(&base_url);
        (app, task)
    }

    fn load_catalog(&self, base_url: &str) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            // Settles the loading state through the regular failure path.
            let err = Error::Http(HttpError::InvalidUrl(base_url.to_string()));
            return Task::done(Message::Gallery(gallery::Message::CatalogLoaded(Err(err))));
        };

        Task::perform(async move { client.fetch_catalog().await }, |result| {
            Message::Gallery(gallery::Message::CatalogLoaded(result))
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.gallery.is_loading())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            previews: &mut self.previews,
            client: self.client.as_ref(),
            download_dir: self.download_dir.as_deref(),
            spinner_rotation: &mut self.spinner_rotation,
            filmstrip_metrics: &mut self.filmstrip_metrics,
        };

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Filmstrip(message) => update::handle_filmstrip_message(&mut ctx, message),
            Message::DetailPanel(message) => {
                update::handle_detail_panel_message(&mut ctx, message)
            }
            Message::PreviewLoaded { file_name, result } => {
                update::handle_preview_loaded(&mut ctx, &file_name, result)
            }
            Message::DownloadCompleted(result) => update::handle_download_completed(result),
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            previews: &self.previews,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageDescriptor, PreviewEntry};
    use crate::ui::{detail_panel, filmstrip};

    fn catalog(names: &[&str]) -> Vec<ImageDescriptor> {
        names.iter().map(|name| ImageDescriptor::new(*name)).collect()
    }

    fn app_with_client() -> App {
        App {
            // Nothing is sent: tasks are built but never run in these tests.
            client: Some(GalleryClient::new("http://127.0.0.1:9").expect("valid url")),
            download_dir: Some(std::env::temp_dir()),
            ..App::default()
        }
    }

    fn load(app: &mut App, names: &[&str]) {
        let _ = app.update(Message::Gallery(gallery::Message::CatalogLoaded(Ok(
            catalog(names),
        ))));
    }

    #[test]
    fn default_app_is_loading() {
        let app = App::default();
        assert!(app.gallery.is_loading());
        assert!(app.gallery.selected().is_none());
    }

    #[test]
    fn catalog_selects_first_and_requests_its_preview() {
        let mut app = app_with_client();
        load(&mut app, &["a.jpg", "b.jpg"]);

        assert!(!app.gallery.is_loading());
        assert!(app.gallery.is_selected("a.jpg"));
        assert!(matches!(
            app.previews.entry("a.jpg"),
            Some(PreviewEntry::Pending)
        ));
        assert!(matches!(
            app.previews.entry("b.jpg"),
            Some(PreviewEntry::Pending)
        ));
    }

    #[test]
    fn previews_are_not_requested_without_client() {
        let mut app = App::default();
        load(&mut app, &["a.jpg"]);
        assert!(app.previews.is_empty());
    }

    #[test]
    fn failed_catalog_stops_loading() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::CatalogLoaded(Err(
            Error::Http(HttpError::Status(503)),
        ))));
        assert!(!app.gallery.is_loading());
        assert!(app.gallery.images().is_empty());
    }

    #[test]
    fn preview_results_update_cache() {
        let mut app = app_with_client();
        load(&mut app, &["a.jpg", "b.jpg"]);

        let _ = app.update(Message::PreviewLoaded {
            file_name: "a.jpg".to_string(),
            result: Ok(vec![0_u8; 16]),
        });
        let _ = app.update(Message::PreviewLoaded {
            file_name: "b.jpg".to_string(),
            result: Err(Error::Http(HttpError::Status(404))),
        });

        assert!(app.previews.get("a.jpg").is_some());
        assert!(matches!(
            app.previews.entry("b.jpg"),
            Some(PreviewEntry::Failed)
        ));
    }

    #[test]
    fn thumbnail_click_changes_selection() {
        let mut app = app_with_client();
        load(&mut app, &["a.jpg", "b.jpg", "c.jpg"]);

        let _ = app.update(Message::Filmstrip(filmstrip::Message::Select(
            "c.jpg".to_string(),
        )));
        assert!(app.gallery.is_selected("c.jpg"));
    }

    #[test]
    fn toggling_layout_forgets_filmstrip_metrics() {
        let mut app = App::default();
        let _ = app.update(Message::Filmstrip(filmstrip::Message::Scrolled(
            filmstrip::Metrics {
                viewport_width: 300.0,
                content_width: 900.0,
            },
        )));
        assert!(app.filmstrip_metrics.is_some());

        let expanded = app.gallery.layout_expanded();
        let _ = app.update(Message::Filmstrip(filmstrip::Message::ToggleLayout));
        assert!(app.filmstrip_metrics.is_none());
        assert_ne!(app.gallery.layout_expanded(), expanded);
    }

    #[test]
    fn download_without_selection_keeps_state() {
        let mut app = app_with_client();
        load(&mut app, &[]);
        let _ = app.update(Message::DetailPanel(detail_panel::Message::Download));
        assert!(app.gallery.selected().is_none());
    }

    #[test]
    fn tick_advances_spinner() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.spinner_rotation > 0.0);
    }

    #[test]
    fn theme_reads_the_resolved_value() {
        let app = App {
            theme: Theme::Light,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(App::default().theme(), Theme::Dark);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert!(!app.title().starts_with("MISSING"));
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = App::default();
        let _ = app.view();

        load(&mut app, &["a.jpg", "b.jpg"]);
        let _ = app.view();

        let _ = app.update(Message::Filmstrip(filmstrip::Message::ToggleLayout));
        let _ = app.view();
    }
}
