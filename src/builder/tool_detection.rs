//! Toolchain discovery for native launcher builds.
//!
//! A native build recompiles this crate, so it needs the crate's source
//! tree plus `cargo` and `rustc` on the host.

use crate::error::{LauncherError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Overrides the source tree that is recompiled.
pub const SOURCE_DIR_VAR: &str = "SHORTCUT_LAUNCHER_SOURCE_DIR";

/// Overrides the build tool.
pub const CARGO_VAR: &str = "SHORTCUT_LAUNCHER_CARGO";

/// Overrides the target directory used for launcher builds.
pub const TARGET_DIR_VAR: &str = "SHORTCUT_LAUNCHER_TARGET_DIR";

/// Source tree this binary was compiled from.
const COMPILED_SOURCE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Everything needed to recompile this crate.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Resolved build tool
    pub cargo: PathBuf,
    /// Crate root containing `Cargo.toml`
    pub source_dir: PathBuf,
    /// Cargo target directory for launcher builds
    pub target_dir: PathBuf,
}

impl Toolchain {
    /// Resolve the toolchain from the environment.
    ///
    /// Fails with an environment error when the source tree has no
    /// `Cargo.toml` or when the build tool or compiler cannot be found.
    pub async fn detect() -> Result<Self> {
        let source_dir = std::env::var_os(SOURCE_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(COMPILED_SOURCE_DIR));
        let source_dir = resolve_source_dir(&source_dir)?;

        let cargo_name = std::env::var_os(CARGO_VAR).unwrap_or_else(|| "cargo".into());
        let cargo = which::which(&cargo_name).map_err(|e| {
            LauncherError::environment(format!(
                "the cargo binary is required to be added into PATH env var ({}: {e})",
                Path::new(&cargo_name).display()
            ))
        })?;
        log::debug!("Found build tool at: {}", cargo.display());

        let rustc = which::which("rustc").map_err(|e| {
            LauncherError::environment(format!(
                "the rustc binary is required to be added into PATH env var ({e})"
            ))
        })?;
        log::debug!("Found compiler at: {}", rustc.display());
        log_version(&rustc).await;

        let target_dir = match std::env::var_os(TARGET_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => default_target_dir()?,
        };

        Ok(Self {
            cargo,
            source_dir,
            target_dir,
        })
    }

    /// Path of the manifest that is rebuilt.
    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join("Cargo.toml")
    }

    /// Where cargo leaves the release binary of this crate.
    pub fn built_binary(&self) -> PathBuf {
        self.target_dir.join("release").join(format!(
            "{}{}",
            env!("CARGO_PKG_NAME"),
            std::env::consts::EXE_SUFFIX
        ))
    }
}

/// Check that `dir` is the root of this crate's source tree.
pub fn resolve_source_dir(dir: &Path) -> Result<PathBuf> {
    let dir = dir.absolutize()?.into_owned();
    if !dir.join("Cargo.toml").is_file() {
        return Err(LauncherError::environment(format!(
            "{SOURCE_DIR_VAR} env var is required to point at the shortcut_launcher sources \
             (no Cargo.toml in {})",
            dir.display()
        )));
    }
    Ok(dir)
}

fn default_target_dir() -> Result<PathBuf> {
    let cache = dirs::cache_dir().ok_or_else(|| {
        LauncherError::environment(format!(
            "no cache directory available; set the {TARGET_DIR_VAR} env var"
        ))
    })?;
    Ok(cache.join("shortcut-launcher").join("target"))
}

async fn log_version(tool: &Path) {
    match tokio::process::Command::new(tool).arg("--version").output().await {
        Ok(output) if output.status.success() => {
            log::info!(
                "✓ {} available: {}",
                tool.display(),
                String::from_utf8_lossy(&output.stdout).trim()
            );
        }
        Ok(output) => {
            log::warn!(
                "{} found but --version check failed (exit code: {:?})",
                tool.display(),
                output.status.code()
            );
        }
        Err(e) => {
            log::warn!("{} found but failed to execute: {}", tool.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_compiled_source_dir_resolves() {
        let dir = resolve_source_dir(Path::new(COMPILED_SOURCE_DIR)).unwrap();
        assert!(dir.join("build.rs").is_file());
    }

    #[test]
    fn test_source_dir_without_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_source_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LauncherError::Environment { .. }));
        assert!(err.to_string().contains(SOURCE_DIR_VAR));
    }

    #[test]
    fn test_built_binary_location() {
        let toolchain = Toolchain {
            cargo: PathBuf::from("cargo"),
            source_dir: PathBuf::from("/src"),
            target_dir: PathBuf::from("/cache/target"),
        };
        let binary = toolchain.built_binary();
        assert!(binary.starts_with("/cache/target/release"));
        assert!(
            binary
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("shortcut_launcher")
        );
        assert_eq!(toolchain.manifest_path(), PathBuf::from("/src/Cargo.toml"));
    }
}
