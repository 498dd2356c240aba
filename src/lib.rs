// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop client for a remote photo gallery service,
//! built with the Iced GUI framework.
//!
//! It fetches the image catalog once, shows a main preview with a filmstrip
//! of thumbnails, lists EXIF details of the selected photo resolved through
//! vendor-specific tag fallbacks, and downloads originals to disk.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod download;
pub mod error;
pub mod gallery;
pub mod icon;
pub mod remote;
pub mod ui;
