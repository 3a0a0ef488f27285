//! Values injected into a recompiled launcher.
//!
//! These are passed to cargo as environment variables and turned into
//! constants by `build.rs`. The names must match the ones it reads.

use crate::config::RUN_MODE;
use crate::metadata::ShortcutDescriptor;
use std::path::PathBuf;

pub const MODE_VAR: &str = "SHORTCUT_LAUNCHER_MODE";
pub const TARGET_OS_VAR: &str = "SHORTCUT_LAUNCHER_TARGET_OS";
pub const URL_VAR: &str = "SHORTCUT_LAUNCHER_URL";
pub const ICON_VAR: &str = "SHORTCUT_LAUNCHER_ICON";
pub const COMMAND_VAR: &str = "SHORTCUT_LAUNCHER_COMMAND";
pub const RESOURCE_VAR: &str = "SHORTCUT_LAUNCHER_RESOURCE";

/// Configuration baked into a generated launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedConfig {
    pub target_os: String,
    pub url: String,
    pub command: String,
    pub icon: Option<PathBuf>,
    /// Icon resource script compiled into the binary
    pub resource: Option<PathBuf>,
}

impl InjectedConfig {
    /// Run-mode configuration for a descriptor, targeting the host OS.
    pub fn for_host(descriptor: &ShortcutDescriptor) -> Self {
        Self {
            target_os: std::env::consts::OS.to_string(),
            url: descriptor.url.clone(),
            command: descriptor.command.clone(),
            icon: None,
            resource: None,
        }
    }

    /// Environment for the cargo invocation.
    ///
    /// Every variable is always present so that a cached build from a
    /// previous launcher never leaks a stale value.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let path_value = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };

        vec![
            (MODE_VAR, RUN_MODE.to_string()),
            (TARGET_OS_VAR, self.target_os.clone()),
            (URL_VAR, self.url.clone()),
            (ICON_VAR, path_value(&self.icon)),
            (COMMAND_VAR, self.command.clone()),
            (RESOURCE_VAR, path_value(&self.resource)),
        ]
    }
}
