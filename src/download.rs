// SPDX-License-Identifier: MPL-2.0
//! Saving downloaded photos to disk.
//!
//! The body is streamed into a `.part` file next to the final file and renamed
//! once complete, so an interrupted download never leaves a truncated file
//! under the real name. Every download gets its own part file, so overlapping
//! downloads of the same photo do not write into each other.

use crate::error::{Error, HttpError, Result};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;

const PARTIAL_SUFFIX: &str = "part";

static NEXT_PARTIAL_ID: AtomicU64 = AtomicU64::new(0);

/// Path a download of `file_name` is saved to inside `directory`.
///
/// Only the last component of `file_name` is kept, so names coming from the
/// service cannot point outside `directory`.
///
/// # Errors
///
/// Returns [`Error::Io`] when no usable file name remains.
pub fn target_path(directory: &Path, file_name: &str) -> Result<PathBuf> {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::Io(format!("unusable file name: {file_name:?}")));
    }
    Ok(directory.join(name))
}

/// Unique `<target>.<pid>-<n>.part` path for one download.
fn partial_path(target: &Path) -> PathBuf {
    let id = NEXT_PARTIAL_ID.fetch_add(1, Ordering::Relaxed);
    let mut partial = target.as_os_str().to_owned();
    partial.push(format!(".{}-{id}.{PARTIAL_SUFFIX}", std::process::id()));
    PathBuf::from(partial)
}

/// Whether `path` looks like an in-progress download.
#[must_use]
pub fn is_partial(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PARTIAL_SUFFIX)
}

/// Streams `response` to `target`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the body cannot be read or the file cannot be written.
/// The partial file is removed on failure.
pub async fn save_stream(response: reqwest::Response, target: &Path) -> Result<PathBuf> {
    let partial = partial_path(target);
    let result = write_stream(response, &partial).await;

    match result {
        Ok(written) => {
            // The last finished download of a name wins the target path.
            if let Err(err) = tokio::fs::rename(&partial, target).await {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(err.into());
            }
            log::info!("Saved {} ({written} bytes)", target.display());
            Ok(target.to_path_buf())
        }
        Err(err) => {
            let _ = tokio::fs::remove_file(&partial).await;
            Err(err)
        }
    }
}

async fn write_stream(response: reqwest::Response, partial: &Path) -> Result<u64> {
    if let Some(parent) = partial.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut file = tokio::fs::File::create(partial).await?;
    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| HttpError::Body(e.to_string()))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_keeps_plain_file_name() {
        let target = target_path(Path::new("/downloads"), "DSC_0001.jpg").unwrap();
        assert_eq!(target, PathBuf::from("/downloads/DSC_0001.jpg"));
    }

    #[test]
    fn target_strips_directories_from_name() {
        let target = target_path(Path::new("/downloads"), "../../etc/passwd").unwrap();
        assert_eq!(target, PathBuf::from("/downloads/passwd"));

        let target = target_path(Path::new("/downloads"), "..\\evil.jpg").unwrap();
        assert_eq!(target, PathBuf::from("/downloads/evil.jpg"));
    }

    #[test]
    fn target_rejects_empty_or_dot_names() {
        for name in ["", "..", "dir/", "  "] {
            assert!(
                target_path(Path::new("/downloads"), name).is_err(),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn partial_paths_are_unique_per_download() {
        let target = Path::new("/downloads/a.jpg");
        let first = partial_path(target);
        let second = partial_path(target);

        assert_ne!(first, second);
        for partial in [&first, &second] {
            assert_eq!(partial.parent(), target.parent());
            assert!(is_partial(partial));
            assert!(partial
                .to_string_lossy()
                .starts_with("/downloads/a.jpg."));
        }
        assert!(!is_partial(target));
    }
}
