//! Shell script launchers for `.desktop` descriptors.

use crate::error::{ErrorExt, Result};
use crate::utils::fs::set_executable;
use std::path::Path;

/// Contents of a script that runs `command`.
pub fn script_contents(command: &str) -> String {
    format!("#!/bin/sh\n\n{command}\n")
}

/// Write an executable shell script running `command` to `path`.
pub async fn write_script(path: &Path, command: &str) -> Result<()> {
    if command.is_empty() {
        log::warn!("Descriptor has no exec entry; {} will do nothing", path.display());
    }

    tokio::fs::write(path, script_contents(command))
        .await
        .fs_context("writing launcher script", path)?;
    set_executable(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_contents() {
        assert_eq!(script_contents("echo hello"), "#!/bin/sh\n\necho hello\n");
    }

    #[tokio::test]
    async fn test_write_script() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.sh");

        write_script(&path, "firefox --private-window").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#!/bin/sh\n\nfirefox --private-window\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o755, 0o755);
        }
    }
}
