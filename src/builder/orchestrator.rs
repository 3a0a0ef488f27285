//! Launcher generation.
//!
//! This module provides the [`Builder`] that turns one shortcut descriptor
//! into one launcher artifact.

use super::{
    artifact::{ArtifactKind, ArtifactPlan, GeneratedArtifact},
    checksum::calculate_sha256,
    codegen::InjectedConfig,
    resource::IconResource,
    script::write_script,
    tool_detection::Toolchain,
};
use crate::{
    config::GenerateRequest,
    error::{CliError, ErrorExt, Result},
    metadata::{self, ShortcutDescriptor},
    utils::{fs, process::run_captured},
};
use std::path::{Path, PathBuf};

/// Generates launchers from shortcut descriptors.
///
/// Native launchers are produced by recompiling this crate with the
/// descriptor's values injected (see [`InjectedConfig`]). Shell launchers
/// are written directly.
///
/// # Examples
///
/// ```no_run
/// use shortcut_launcher::builder::Builder;
///
/// # async fn example() -> shortcut_launcher::Result<()> {
/// let builder = Builder::new(".");
/// let artifact = builder.build("Docs.url".as_ref()).await?;
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    out_dir: PathBuf,
    native_desktop: bool,
    toolchain: Option<Toolchain>,
}

impl Builder {
    /// Creates a builder writing artifacts into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            native_desktop: false,
            toolchain: None,
        }
    }

    /// Creates a builder from a generate request.
    ///
    /// Fails if the request carries no descriptor path.
    pub fn from_request(request: &GenerateRequest) -> Result<(Self, PathBuf)> {
        let descriptor = request
            .descriptor
            .clone()
            .ok_or_else(|| CliError::MissingArgument {
                argument: "shortcut file".to_string(),
            })?;

        let builder = Self::new(&request.out_dir).native_desktop(request.native_desktop);
        Ok((builder, descriptor))
    }

    /// Compile `.desktop` descriptors into native binaries instead of scripts.
    pub fn native_desktop(mut self, native_desktop: bool) -> Self {
        self.native_desktop = native_desktop;
        self
    }

    /// Use this toolchain instead of detecting one from the environment.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    /// Generates the launcher for `descriptor_path`.
    ///
    /// The extension is validated before anything is read, and the first
    /// failure aborts the build.
    pub async fn build(&self, descriptor_path: &Path) -> Result<GeneratedArtifact> {
        let plan = ArtifactPlan::for_descriptor(descriptor_path, self.native_desktop)?;
        let descriptor = metadata::load(descriptor_path).await?;

        fs::create_dir_all(&self.out_dir).await?;
        let output = self.out_dir.join(&plan.file_name);

        match plan.kind {
            ArtifactKind::NativeBinary => {
                self.build_native(&descriptor, plan.embeds_icon, &output)
                    .await?
            }
            ArtifactKind::ShellScript => write_script(&output, &descriptor.command).await?,
        }

        let size = tokio::fs::metadata(&output)
            .await
            .fs_context("reading artifact metadata", &output)?
            .len();
        let checksum = calculate_sha256(&output).await?;

        Ok(GeneratedArtifact {
            path: output,
            kind: plan.kind,
            size,
            checksum,
        })
    }

    /// Recompiles this crate with the descriptor baked in and copies the
    /// result to `output`. The descriptor icon is only embedded when
    /// `embed_icon` is set.
    async fn build_native(
        &self,
        descriptor: &ShortcutDescriptor,
        embed_icon: bool,
        output: &Path,
    ) -> Result<()> {
        let toolchain = match &self.toolchain {
            Some(toolchain) => toolchain.clone(),
            None => Toolchain::detect().await?,
        };

        let mut injected = InjectedConfig::for_host(descriptor);

        // Dropped at the end of this function, whether or not cargo succeeds.
        let icon_resource = match descriptor.icon_path() {
            Some(icon) if embed_icon => Some(IconResource::create(&self.out_dir, icon).await?),
            _ => None,
        };
        if let Some(resource) = &icon_resource {
            injected.icon = Some(resource.icon().to_path_buf());
            injected.resource = Some(resource.path().to_path_buf());
        }

        fs::remove_file_if_exists(output).await?;

        let mut command = tokio::process::Command::new(&toolchain.cargo);
        command
            .arg("build")
            .arg("--release")
            .arg("--bin")
            .arg(env!("CARGO_PKG_NAME"))
            .arg("--manifest-path")
            .arg(toolchain.manifest_path())
            .arg("--target-dir")
            .arg(&toolchain.target_dir)
            .envs(injected.env_vars());
        run_captured(&mut command).await?;

        fs::copy_file(&toolchain.built_binary(), output).await?;
        fs::set_executable(output).await
    }
}
