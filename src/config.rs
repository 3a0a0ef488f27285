//! Startup configuration and mode selection.
//!
//! A binary either generates launchers (build mode) or is a generated
//! launcher (run mode). The choice is fixed when the binary is compiled:
//! `build.rs` writes the injected values into a constants file which is
//! read here exactly once.

use std::path::PathBuf;

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/embedded_config.rs"));
}

/// Value of the mode constant in a generated launcher.
pub const RUN_MODE: &str = "run";

/// Whether this binary generates launchers or is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// No values injected; read a descriptor and build an artifact.
    Build,
    /// Values injected by a previous build; perform the launch action.
    Run,
}

impl LaunchMode {
    /// Interpret the injected mode constant. Anything other than `run` is build mode.
    pub fn from_flag(flag: &str) -> Self {
        if flag == RUN_MODE {
            Self::Run
        } else {
            Self::Build
        }
    }
}

/// Constants compiled into the current binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedConfig {
    pub mode: LaunchMode,
    pub target_os: String,
    pub url: String,
    pub icon: String,
    pub command: String,
}

impl EmbeddedConfig {
    /// The configuration this binary was compiled with.
    pub fn compiled() -> Self {
        Self::from_constants(
            embedded::MODE,
            embedded::TARGET_OS,
            embedded::URL,
            embedded::ICON,
            embedded::COMMAND,
        )
    }

    fn from_constants(mode: &str, target_os: &str, url: &str, icon: &str, command: &str) -> Self {
        Self {
            mode: LaunchMode::from_flag(mode),
            target_os: target_os.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            command: command.to_string(),
        }
    }
}

/// What a generated launcher opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    /// OS the launcher was generated on
    pub target_os: String,
    pub url: String,
    pub command: String,
}

/// Request to generate a launcher from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Descriptor path from the command line, if given
    pub descriptor: Option<PathBuf>,
    /// Directory the artifact is written into
    pub out_dir: PathBuf,
    /// Compile `.desktop` descriptors instead of writing a shell script
    pub native_desktop: bool,
}

/// The operation selected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GenerateLauncher(GenerateRequest),
    ActAsLauncher(LaunchTarget),
}

impl Operation {
    /// Select the operation from the embedded configuration.
    ///
    /// `request` is only evaluated in build mode, so a generated launcher
    /// never parses command-line arguments.
    pub fn select(
        embedded: EmbeddedConfig,
        request: impl FnOnce() -> GenerateRequest,
    ) -> Self {
        match embedded.mode {
            LaunchMode::Run => Self::ActAsLauncher(LaunchTarget {
                target_os: embedded.target_os,
                url: embedded.url,
                command: embedded.command,
            }),
            LaunchMode::Build => Self::GenerateLauncher(request()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            descriptor: Some(PathBuf::from("site.url")),
            out_dir: PathBuf::from("."),
            native_desktop: false,
        }
    }

    #[test]
    fn test_mode_flag() {
        assert_eq!(LaunchMode::from_flag("run"), LaunchMode::Run);
        assert_eq!(LaunchMode::from_flag(""), LaunchMode::Build);
        assert_eq!(LaunchMode::from_flag("true"), LaunchMode::Build);
    }

    #[test]
    fn test_compiled_binary_is_build_mode() {
        assert_eq!(EmbeddedConfig::compiled().mode, LaunchMode::Build);
    }

    #[test]
    fn test_select_build_mode() {
        let embedded = EmbeddedConfig::from_constants("", "", "", "", "");
        assert_eq!(
            Operation::select(embedded, request),
            Operation::GenerateLauncher(request())
        );
    }

    #[test]
    fn test_select_run_mode_skips_arguments() {
        let embedded =
            EmbeddedConfig::from_constants("run", "windows", "https://example.com", "a.ico", "");
        let operation = Operation::select(embedded, || panic!("arguments parsed in run mode"));
        assert_eq!(
            operation,
            Operation::ActAsLauncher(LaunchTarget {
                target_os: "windows".into(),
                url: "https://example.com".into(),
                command: String::new(),
            })
        );
    }
}
