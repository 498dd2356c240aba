// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for the two directories the
//! gallery touches on disk: where `settings.toml` lives and where downloaded
//! photos are written.
//!
//! # Path Resolution Order
//!
//! Config directory:
//! 1. **Explicit override** - parameter to `_with_override()` (for tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `ICED_GALLERY_CONFIG_DIR`
//! 4. **Platform default** - via `dirs` crate
//!
//! Download directory:
//! 1. **CLI argument** `--download-dir`
//! 2. **Environment variable** `ICED_GALLERY_DOWNLOAD_DIR`
//! 3. **Configured value** - `[download] directory` in `settings.toml`
//! 4. **Platform default** - the user's download directory, else home
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.download_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Environment variable to override the download directory.
pub const ENV_DOWNLOAD_DIR: &str = "ICED_GALLERY_DOWNLOAD_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for download directory (set once at startup).
static CLI_DOWNLOAD_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and download directories.
///
/// Must run before any path resolution. A second call is ignored and logged,
/// the first values stay in effect.
pub fn init_cli_overrides(config_dir: Option<String>, download_dir: Option<String>) {
    if !set_overrides(&CLI_CONFIG_DIR, &CLI_DOWNLOAD_DIR, config_dir, download_dir) {
        log::warn!("CLI path overrides were already initialized; ignoring new values");
    }
}

/// Fills both cells that are still empty. Returns false if either was set.
fn set_overrides(
    config_cell: &OnceLock<Option<PathBuf>>,
    download_cell: &OnceLock<Option<PathBuf>>,
    config_dir: Option<String>,
    download_dir: Option<String>,
) -> bool {
    let config_set = config_cell.set(config_dir.map(PathBuf::from));
    let download_set = download_cell.set(download_dir.map(PathBuf::from));
    config_set.is_ok() && download_set.is_ok()
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_download_dir() -> Option<PathBuf> {
    CLI_DOWNLOAD_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`:
///    - Linux: `~/.config/IcedGallery/`
///    - macOS: `~/Library/Application Support/IcedGallery/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedGallery\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override has highest priority because it's the most specific - when
/// code explicitly passes a path, it should always be respected.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory downloaded photos are saved into.
///
/// `configured` is the `[download] directory` value from the settings file;
/// command line and environment take precedence over it.
pub fn get_download_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = get_cli_download_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_DOWNLOAD_DIR) {
        return Some(path);
    }

    if let Some(path) = configured {
        return Some(path);
    }

    dirs::download_dir().or_else(dirs::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn download_override_is_set_when_config_override_already_was() {
        let config_cell = OnceLock::new();
        let download_cell = OnceLock::new();
        config_cell
            .set(Some(PathBuf::from("/first/config")))
            .unwrap();

        let fresh = set_overrides(
            &config_cell,
            &download_cell,
            Some("/second/config".to_string()),
            Some("/cli/downloads".to_string()),
        );

        assert!(!fresh);
        assert_eq!(config_cell.get(), Some(&Some(PathBuf::from("/first/config"))));
        assert_eq!(download_cell.get(), Some(&Some(PathBuf::from("/cli/downloads"))));
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_beats_configured_download_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DOWNLOAD_DIR, "/env/downloads");

        let result = get_download_dir(Some(PathBuf::from("/configured/downloads")));
        assert_eq!(result, Some(PathBuf::from("/env/downloads")));

        std::env::remove_var(ENV_DOWNLOAD_DIR);
    }

    #[test]
    fn configured_download_dir_used_without_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DOWNLOAD_DIR);

        let configured = PathBuf::from("/configured/downloads");
        let result = get_download_dir(Some(configured.clone()));
        assert_eq!(result, Some(configured));
    }
}
