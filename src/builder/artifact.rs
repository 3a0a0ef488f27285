//! Artifact naming and records.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Descriptor extensions converted into Windows-style executables.
const EXE_EXTENSIONS: &[&str] = &["lnk", "url", "cda"];

/// Descriptor extension converted into a shell launcher.
const DESKTOP_EXTENSION: &str = "desktop";

/// How a launcher is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A recompiled copy of this program with the target embedded
    NativeBinary,
    /// A `#!/bin/sh` script running the command
    ShellScript,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NativeBinary => f.write_str("executable"),
            Self::ShellScript => f.write_str("shell script"),
        }
    }
}

/// Output file name and kind derived from a descriptor path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    pub file_name: String,
    pub kind: ArtifactKind,
    /// Whether the descriptor's icon is a Windows icon file to embed.
    /// `.desktop` icons are theme names and are never embedded.
    pub embeds_icon: bool,
}

impl ArtifactPlan {
    /// Map a descriptor path to its artifact.
    ///
    /// `.lnk`, `.url` and `.cda` become `<stem>.exe`. `.desktop` becomes
    /// `<stem>.sh`, or an extensionless native binary when `native_desktop`
    /// is set. Matching is case-insensitive and touches no files.
    pub fn for_descriptor(descriptor: &Path, native_desktop: bool) -> Result<Self> {
        let unsupported = || CliError::UnsupportedDescriptor {
            path: descriptor.to_path_buf(),
        };

        let stem = descriptor
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(unsupported)?;
        let extension = descriptor
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(unsupported)?;

        let plan = if EXE_EXTENSIONS.contains(&extension.as_str()) {
            Self {
                file_name: format!("{stem}.exe"),
                kind: ArtifactKind::NativeBinary,
                embeds_icon: true,
            }
        } else if extension == DESKTOP_EXTENSION && native_desktop {
            Self {
                file_name: stem.to_string(),
                kind: ArtifactKind::NativeBinary,
                embeds_icon: false,
            }
        } else if extension == DESKTOP_EXTENSION {
            Self {
                file_name: format!("{stem}.sh"),
                kind: ArtifactKind::ShellScript,
                embeds_icon: false,
            }
        } else {
            return Err(unsupported().into());
        };

        Ok(plan)
    }
}

/// A launcher written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256
    pub checksum: String,
}
