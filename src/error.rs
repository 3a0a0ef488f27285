//! Error types for launcher generation and launching.
//!
//! Every failure funnels into [`LauncherError`]; `main` prints it and exits
//! with a non-zero status.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Main error type for all launcher operations
#[derive(Error, Debug)]
pub enum LauncherError {
    /// Usage errors (bad or missing arguments)
    #[error("{0}")]
    Cli(#[from] CliError),

    /// The host is missing something a native build needs
    #[error("{reason}")]
    Environment {
        /// What is missing and how to fix it
        reason: String,
    },

    /// Filesystem operation failed on a known path
    #[error("failed {context} {}: {source}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// IO errors without path context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A child process could not be started
    #[error("  => error: failed to run {command}: {source}")]
    CommandSpawn {
        /// Command line that was attempted
        command: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A child process exited unsuccessfully
    #[error("  => error: {command} exited with {status} {stderr}")]
    CommandFailed {
        /// Command line that failed
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing required argument
    #[error("first argument should be a path of the {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Descriptor extension is not one we can convert
    #[error("unsupported file. file must be one of these: .lnk, .url, .cda, .desktop")]
    UnsupportedDescriptor {
        /// Path that was rejected
        path: PathBuf,
    },

    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl LauncherError {
    /// Build an environment error from any message
    pub fn environment(reason: impl Into<String>) -> Self {
        Self::Environment {
            reason: reason.into(),
        }
    }
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wrap the error with the operation being performed and the path involved.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| LauncherError::Fs {
            context,
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Return early with an invalid-arguments error.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::LauncherError::Cli(
            $crate::error::CliError::InvalidArguments {
                reason: format!($($arg)*),
            },
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_messages() {
        let missing = LauncherError::from(CliError::MissingArgument {
            argument: "shortcut file".into(),
        });
        assert_eq!(
            missing.to_string(),
            "first argument should be a path of the shortcut file"
        );

        let unsupported = LauncherError::from(CliError::UnsupportedDescriptor {
            path: PathBuf::from("notes.txt"),
        });
        assert_eq!(
            unsupported.to_string(),
            "unsupported file. file must be one of these: .lnk, .url, .cda, .desktop"
        );
    }

    #[test]
    fn test_fs_context_includes_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result
            .fs_context("reading descriptor", Path::new("missing.url"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("reading descriptor"));
        assert!(message.contains("missing.url"));
    }

    #[test]
    fn test_command_failed_carries_stderr() {
        let err = LauncherError::CommandFailed {
            command: "cargo build".into(),
            status: "exit status: 101".into(),
            stderr: "error[E0425]".into(),
        };
        assert!(err.to_string().contains("error[E0425]"));
    }
}
