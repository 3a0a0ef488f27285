//! Run mode: performing the launch action of a generated launcher.
//!
//! The target is fixed at compile time. Windows launchers hand the URL to
//! the shell's protocol handler; everywhere else the command runs through
//! the platform shell, falling back to the desktop opener for URL-only
//! shortcuts.

use crate::bail;
use crate::config::LaunchTarget;
use crate::error::Result;
use crate::utils::process::run_captured;
use std::io::Write;
use tokio::process::Command;

/// How a launch target is carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// `rundll32 url.dll,FileProtocolHandler <url>`
    ProtocolHandler(String),
    /// Command line run through the platform shell
    Shell(String),
    /// URL passed to `open` / `xdg-open`
    DesktopOpener(String),
}

impl LaunchAction {
    /// Choose the action for a target.
    pub fn for_target(target: &LaunchTarget) -> Result<Self> {
        if target.target_os == "windows" && !target.url.is_empty() {
            return Ok(Self::ProtocolHandler(target.url.clone()));
        }
        if !target.command.is_empty() {
            return Ok(Self::Shell(target.command.clone()));
        }
        if !target.url.is_empty() {
            return Ok(Self::DesktopOpener(target.url.clone()));
        }
        bail!("this launcher has neither a url nor a command to run")
    }

    /// Command that performs the action.
    pub fn command(&self) -> Command {
        match self {
            Self::ProtocolHandler(url) => {
                let mut command = Command::new("rundll32");
                command.arg("url.dll,FileProtocolHandler").arg(url);
                command
            }
            Self::Shell(line) => shell_command(line),
            Self::DesktopOpener(url) => {
                let opener = if cfg!(target_os = "macos") { "open" } else { "xdg-open" };
                let mut command = Command::new(opener);
                command.arg(url);
                command
            }
        }
    }
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("/bin/sh");
    command.arg("-c").arg(line);
    command
}

/// Perform the launch action, forwarding the child's standard output.
pub async fn launch(target: &LaunchTarget) -> Result<()> {
    let action = LaunchAction::for_target(target)?;
    log::debug!("Launching {:?}", action);

    let output = run_captured(&mut action.command()).await?;
    if !output.stdout.is_empty() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&output.stdout)?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(os: &str, url: &str, command: &str) -> LaunchTarget {
        LaunchTarget {
            target_os: os.into(),
            url: url.into(),
            command: command.into(),
        }
    }

    #[test]
    fn test_windows_url_uses_protocol_handler() {
        let action = LaunchAction::for_target(&target("windows", "https://example.com", "")).unwrap();
        assert_eq!(action, LaunchAction::ProtocolHandler("https://example.com".into()));

        let command = action.command();
        let args: Vec<_> = command.as_std().get_args().collect();
        assert_eq!(command.as_std().get_program(), "rundll32");
        assert_eq!(args, ["url.dll,FileProtocolHandler", "https://example.com"]);
    }

    #[test]
    fn test_command_runs_through_shell() {
        let action = LaunchAction::for_target(&target("linux", "", "echo hello")).unwrap();
        assert_eq!(action, LaunchAction::Shell("echo hello".into()));
    }

    #[test]
    fn test_unix_url_only_uses_opener() {
        let action = LaunchAction::for_target(&target("linux", "https://example.com", "")).unwrap();
        assert_eq!(action, LaunchAction::DesktopOpener("https://example.com".into()));
    }

    #[test]
    fn test_empty_target_rejected() {
        let err = LaunchAction::for_target(&target("linux", "", "")).unwrap_err();
        assert!(err.to_string().contains("neither a url nor a command"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_shell_command() {
        launch(&target("linux", "", "true")).await.unwrap();
        assert!(launch(&target("linux", "", "exit 4")).await.is_err());
    }
}
