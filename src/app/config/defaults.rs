// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Address of the gallery service when neither the CLI nor the settings file
/// provide one.
pub const DEFAULT_BASE_URL: &str = "https://filterdeploy.azurewebsites.net";

/// User agent sent with every request to the gallery service.
pub const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Display Defaults
// ==========================================================================

/// The filmstrip starts expanded.
pub const DEFAULT_FILMSTRIP_EXPANDED: bool = true;

/// Default number of decoded previews kept in memory.
pub const DEFAULT_PREVIEW_CACHE_SIZE: usize = 64;

/// Minimum preview cache size (the selected image plus a few neighbours).
pub const MIN_PREVIEW_CACHE_SIZE: usize = 4;

/// Maximum preview cache size.
pub const MAX_PREVIEW_CACHE_SIZE: usize = 1024;
