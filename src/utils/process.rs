//! Child process execution.
//!
//! One child at a time, awaited to completion with stdout and stderr
//! captured. A non-zero exit becomes [`LauncherError::CommandFailed`]
//! carrying the captured stderr.

use crate::error::{LauncherError, Result};
use std::ffi::OsStr;
use std::process::Output;
use tokio::process::Command;

/// Run `command` and return its captured output if it succeeds.
pub async fn run_captured(command: &mut Command) -> Result<Output> {
    let display = describe(command);
    log::info!("{}", display);

    let output = command
        .output()
        .await
        .map_err(|source| LauncherError::CommandSpawn {
            command: display.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(LauncherError::CommandFailed {
            command: display,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

/// Printable command line.
fn describe(command: &Command) -> String {
    let inner = command.as_std();
    std::iter::once(inner.get_program())
        .chain(inner.get_args())
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}
