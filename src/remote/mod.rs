// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the gallery service.
//!
//! The service exposes three endpoints:
//! - `GET /images` - the catalog, `{ "images": [ImageDescriptor, ...] }`
//! - `GET /image-preview/{file_name}` - preview bytes for the viewer and filmstrip
//! - `GET /download/{file_name}` - the original file
//!
//! File names are always sent as a single percent-encoded path segment.

use crate::app::config::USER_AGENT;
use crate::download;
use crate::error::{Error, HttpError, Result};
use crate::gallery::{CatalogResponse, ImageDescriptor};
use reqwest::Url;
use std::path::{Path, PathBuf};

const CATALOG_SEGMENT: &str = "images";
const PREVIEW_SEGMENT: &str = "image-preview";
const DOWNLOAD_SEGMENT: &str = "download";

/// Client bound to one gallery service base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GalleryClient {
    /// Builds a client for `base_url` (an `http` or `https` URL).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] when the URL cannot serve as a base,
    /// or [`HttpError::Request`] when the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Request(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn catalog_url(&self) -> Result<Url> {
        self.endpoint(&[CATALOG_SEGMENT])
    }

    pub fn preview_url(&self, file_name: &str) -> Result<Url> {
        self.endpoint(&[PREVIEW_SEGMENT, file_name])
    }

    pub fn download_url(&self, file_name: &str) -> Result<Url> {
        self.endpoint(&[DOWNLOAD_SEGMENT, file_name])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HttpError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetches the image catalog.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses and malformed JSON.
    pub async fn fetch_catalog(&self) -> Result<Vec<ImageDescriptor>> {
        let url = self.catalog_url()?;
        log::debug!("Fetching catalog from {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;
        let catalog: CatalogResponse = serde_json::from_slice(&body)?;
        Ok(catalog.images)
    }

    /// Fetches the preview bytes of `file_name`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and non-success statuses.
    pub async fn fetch_preview(&self, file_name: &str) -> Result<Vec<u8>> {
        let url = self.preview_url(file_name)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;
        Ok(body.to_vec())
    }

    /// Downloads the original `file_name` into `directory` under the same name.
    ///
    /// Returns the path of the saved file.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, unusable file names
    /// and I/O errors while writing.
    pub async fn download_to(&self, file_name: &str, directory: &Path) -> Result<PathBuf> {
        let target = download::target_path(directory, file_name)?;
        let url = self.download_url(file_name)?;
        log::debug!("Downloading {url} to {}", target.display());
        let response = self.http.get(url).send().await?.error_for_status()?;
        download::save_stream(response, &target).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(Error::Http(HttpError::InvalidUrl(raw.to_string())));
    }
    Ok(url)
}
