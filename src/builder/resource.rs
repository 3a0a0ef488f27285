//! Transient icon resource for native launchers.
//!
//! The resource script only lives for the duration of one build. The guard
//! removes it when dropped, so early returns and failed builds clean up too.

use crate::error::{ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// File name of the transient resource script.
pub const RESOURCE_FILE_NAME: &str = "launcher_icon.rc";

/// An icon resource script on disk, removed on drop.
#[derive(Debug)]
pub struct IconResource {
    path: PathBuf,
    icon: PathBuf,
}

impl IconResource {
    /// Write a resource script for `icon` into `dir`.
    pub async fn create(dir: &Path, icon: &Path) -> Result<Self> {
        let icon = icon.absolutize()?.into_owned();
        if !icon.is_file() {
            log::warn!("Icon {} does not exist; the build will likely fail", icon.display());
        }

        // Never clobber a file we did not create; the guard deletes it later.
        let path = dir.join(RESOURCE_FILE_NAME);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .fs_context("creating icon resource", &path)?;
        let resource = Self { path, icon };

        file.write_all(resource_script(&resource.icon).as_bytes())
            .await
            .fs_context("writing icon resource", &resource.path)?;
        file.flush()
            .await
            .fs_context("writing icon resource", &resource.path)?;
        log::info!("Created icon resource {}", resource.path.display());

        Ok(resource)
    }

    /// Location of the resource script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of the icon it references.
    pub fn icon(&self) -> &Path {
        &self.icon
    }
}

impl Drop for IconResource {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Removed icon resource {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "Failed to remove icon resource {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Resource script declaring `icon` as the application icon.
fn resource_script(icon: &Path) -> String {
    let escaped = icon
        .display()
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\"\"");
    format!("1 ICON \"{escaped}\"\n")
}
