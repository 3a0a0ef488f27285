//! File system utilities for artifact output.
//!
//! Idempotent helpers with path context attached to every error.

use crate::error::{ErrorExt, LauncherError, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating output directory", path)
}

/// Removes a file if it exists.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            log::debug!("Removed existing {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing existing artifact", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(LauncherError::Fs {
            context: "locating build output",
            path: from.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a file"),
        });
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating output directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying artifact to", to)?;
    Ok(())
}

/// Marks a file as executable (`rwxr-xr-x`).
#[cfg(unix)]
pub async fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .fs_context("setting permissions on", path)
}

/// Marks a file as executable. Windows has no executable bit.
#[cfg(not(unix))]
pub async fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
