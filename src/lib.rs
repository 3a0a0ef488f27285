//! Shortcut to launcher converter.
//!
//! Turns `.lnk`, `.url`, `.cda` and `.desktop` shortcuts into standalone
//! launchers. Windows-style shortcuts are converted by recompiling this
//! crate with the shortcut target baked in, so the same program acts as
//! both the generator (build mode) and the generated launcher (run mode).
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod metadata;
pub mod utils;

// Re-export commonly used types
pub use error::{CliError, LauncherError, Result};
