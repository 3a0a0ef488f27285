//! Command line argument parsing.
//!
//! Arguments are only parsed in build mode; a generated launcher ignores
//! its command line entirely.

use crate::config::GenerateRequest;
use clap::Parser;
use std::path::PathBuf;

/// Shortcut to launcher converter
#[derive(Parser, Debug)]
#[command(
    name = "shortcut_launcher",
    version,
    about = "Turns a shortcut file into a standalone launcher",
    long_about = "Turns a .lnk, .url, .cda or .desktop shortcut into a standalone launcher.

.lnk, .url and .cda shortcuts become <name>.exe, a recompiled copy of this
program that opens the shortcut target when run. .desktop shortcuts become
<name>.sh, a shell script running the Exec command.

Usage:
  shortcut_launcher Docs.url
  shortcut_launcher --out-dir ~/bin firefox.desktop
  shortcut_launcher --native firefox.desktop

Native builds need cargo and rustc on PATH."
)]
pub struct Args {
    /// Shortcut file to convert (.lnk, .url, .cda, .desktop)
    #[arg(value_name = "SHORTCUT")]
    pub descriptor: Option<PathBuf>,

    /// Directory the launcher is written into
    #[arg(short = 'o', long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Compile .desktop shortcuts into a native binary instead of a script
    #[arg(long)]
    pub native: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The generate request these arguments describe
    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            descriptor: self.descriptor.clone(),
            out_dir: self.out_dir.clone(),
            native_desktop: self.native,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            output: super::OutputManager::new(false),
        }
    }
}

impl RuntimeConfig {
    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor_only() {
        let args = Args::try_parse_from(["shortcut_launcher", "Docs.url"]).unwrap();
        let request = args.generate_request();

        assert_eq!(request.descriptor, Some(PathBuf::from("Docs.url")));
        assert_eq!(request.out_dir, PathBuf::from("."));
        assert!(!request.native_desktop);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_without_descriptor() {
        let args = Args::try_parse_from(["shortcut_launcher"]).unwrap();
        assert!(args.descriptor.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "shortcut_launcher",
            "--native",
            "-q",
            "-o",
            "/tmp/launchers",
            "editor.desktop",
        ])
        .unwrap();
        let request = args.generate_request();

        assert!(request.native_desktop);
        assert!(args.quiet);
        assert_eq!(request.out_dir, PathBuf::from("/tmp/launchers"));
    }
}
