//! Shortcut descriptor loading.
//!
//! Descriptors are read as loose `key=value` text. This covers the
//! `[InternetShortcut]` layout of `.url` files and the `[Desktop Entry]`
//! layout of `.desktop` files; section headers and unknown keys are ignored.

use crate::error::{ErrorExt, Result};
use std::collections::HashMap;
use std::path::Path;

/// Fields extracted from a shortcut descriptor.
///
/// Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    /// Target address to open
    pub url: String,
    /// Path to an icon image, only used for Windows executables
    pub icon: String,
    /// Shell command line (`exec` key)
    pub command: String,
}

impl ShortcutDescriptor {
    /// Parse descriptor text.
    ///
    /// Keys are trimmed and lowercased, `iconfile` is an alias for `icon`,
    /// and the value is everything after the first `=`. A line without `=`
    /// maps its key to an empty value. The last occurrence of a key wins.
    pub fn parse(text: &str) -> Self {
        let mut fields: HashMap<String, String> = HashMap::new();

        for line in text.lines() {
            let line = line.trim();
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key, value),
                None => (line, ""),
            };

            let mut key = key.trim().to_lowercase();
            if key == "iconfile" {
                key = "icon".to_string();
            }
            fields.insert(key, value.to_string());
        }

        let mut take = |key: &str| fields.remove(key).unwrap_or_default();
        Self {
            url: take("url"),
            icon: take("icon"),
            command: take("exec"),
        }
    }

    /// Returns the icon path if one was given.
    pub fn icon_path(&self) -> Option<&Path> {
        (!self.icon.is_empty()).then(|| Path::new(&self.icon))
    }
}

/// Load a descriptor from disk.
///
/// `.lnk` files are not guaranteed to be text, so invalid UTF-8 is replaced
/// rather than rejected.
pub async fn load(path: &Path) -> Result<ShortcutDescriptor> {
    let bytes = tokio::fs::read(path)
        .await
        .fs_context("reading shortcut file", path)?;

    let descriptor = ShortcutDescriptor::parse(&String::from_utf8_lossy(&bytes));
    log::debug!("Loaded {}: {:?}", path.display(), descriptor);

    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_internet_shortcut() {
        let text = "[InternetShortcut]\r\nURL=https://example.com/\r\nIconFile=C:\\icons\\site.ico\r\nIconIndex=0\r\n";
        let descriptor = ShortcutDescriptor::parse(text);

        assert_eq!(descriptor.url, "https://example.com/");
        assert_eq!(descriptor.icon, "C:\\icons\\site.ico");
        assert_eq!(descriptor.command, "");
    }

    #[test]
    fn test_parse_desktop_entry() {
        let text = "[Desktop Entry]\nType=Application\nName=Editor\nExec=gedit --new-window\nIcon=accessories-text-editor\n";
        let descriptor = ShortcutDescriptor::parse(text);

        assert_eq!(descriptor.command, "gedit --new-window");
        assert_eq!(descriptor.icon, "accessories-text-editor");
        assert_eq!(descriptor.url, "");
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(
            ShortcutDescriptor::parse("URL=http://x"),
            ShortcutDescriptor::parse("url=http://x")
        );
    }

    #[test]
    fn test_iconfile_alias() {
        assert_eq!(
            ShortcutDescriptor::parse("iconfile=a.ico").icon,
            ShortcutDescriptor::parse("icon=a.ico").icon
        );
    }

    #[test]
    fn test_value_keeps_everything_after_first_equals() {
        let descriptor = ShortcutDescriptor::parse("url=https://example.com/search?q=rust&page=2");
        assert_eq!(descriptor.url, "https://example.com/search?q=rust&page=2");
    }

    #[test]
    fn test_line_without_equals() {
        let descriptor = ShortcutDescriptor::parse("exec\n\n   \nurl");
        assert_eq!(descriptor, ShortcutDescriptor::default());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let descriptor = ShortcutDescriptor::parse("url=https://first\nURL=https://second");
        assert_eq!(descriptor.url, "https://second");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "URL=https://example.com\nIconFile=site.ico\nExec=echo hi";
        assert_eq!(ShortcutDescriptor::parse(text), ShortcutDescriptor::parse(text));
    }

    #[test]
    fn test_icon_path() {
        assert!(ShortcutDescriptor::default().icon_path().is_none());
        let descriptor = ShortcutDescriptor::parse("icon=site.ico");
        assert_eq!(descriptor.icon_path(), Some(Path::new("site.ico")));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs.url");
        std::fs::write(&path, "[InternetShortcut]\nURL=https://docs.rs\n").unwrap();

        let descriptor = load(&path).await.unwrap();
        assert_eq!(descriptor.url, "https://docs.rs");
    }

    #[tokio::test]
    async fn test_load_tolerates_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.lnk");
        let mut bytes = vec![0x4c, 0x00, 0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(b"url=https://example.com\n");
        std::fs::write(&path, bytes).unwrap();

        let descriptor = load(&path).await.unwrap();
        assert_eq!(descriptor.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load(&temp_dir.path().join("gone.url")).await.unwrap_err();
        assert!(err.to_string().contains("gone.url"));
    }
}
