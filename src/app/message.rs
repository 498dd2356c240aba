// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery;
use crate::ui::{detail_panel, filmstrip};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded through a single entry point.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Filmstrip(filmstrip::Message),
    DetailPanel(detail_panel::Message),
    /// Result of fetching the preview bytes of `file_name`.
    PreviewLoaded {
        file_name: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Result of a download, with the path of the saved file.
    DownloadCompleted(Result<PathBuf, Error>),
    Tick(Instant), // Spinner animation while loading
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery service address, taking precedence over the config.
    pub base_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional download directory override.
    /// Takes precedence over `ICED_GALLERY_DOWNLOAD_DIR` environment variable.
    pub download_dir: Option<String>,
}
