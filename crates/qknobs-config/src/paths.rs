//! Platform-specific paths for layouts and configuration.
//!
//! # Directory Structure
//!
//! - **User layouts**: `~/.config/qknobs/layouts/` (Linux), `~/Library/Application Support/qknobs/layouts/` (macOS), `%APPDATA%\qknobs\layouts\` (Windows)
//! - **User config**: the parent of the layouts directory
//!
//! # Example
//!
//! ```rust,no_run
//! use qknobs_config::paths;
//!
//! if let Some(path) = paths::find_layout("studio") {
//!     println!("Found layout at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "qknobs";

/// Subdirectory name for layouts.
const LAYOUTS_SUBDIR: &str = "layouts";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific layouts directory.
pub fn user_layouts_dir() -> PathBuf {
    user_config_dir().join(LAYOUTS_SUBDIR)
}

/// Find a layout file by name.
///
/// The name can be a path to an existing file, or a layout name (with or
/// without `.toml`) looked up in the user layouts directory. Factory layouts
/// have no file; see [`crate::resolve_layout`] for the full lookup.
pub fn find_layout(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }
    find_layout_in_dir(&user_layouts_dir(), name)
}

fn find_layout_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };
    let path = dir.join(filename);
    path.is_file().then_some(path)
}

/// Ensure the user layouts directory exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_layouts_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_layouts_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all layout files in the user layouts directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_layouts() -> Vec<PathBuf> {
    list_layouts_in_dir(&user_layouts_dir())
}

/// List `.toml` files in `dir`, sorted by path.
pub fn list_layouts_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut layouts: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    layouts.sort();
    layouts
}

/// Get the layout name from a file path.
///
/// ```rust
/// use qknobs_config::paths::layout_name_from_path;
/// use std::path::Path;
///
/// let name = layout_name_from_path(Path::new("/path/to/studio.toml"));
/// assert_eq!(name, Some("studio".to_string()));
/// ```
pub fn layout_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_user_dirs() {
        let config = user_config_dir();
        assert!(config.to_string_lossy().contains("qknobs"));
        assert!(user_layouts_dir().starts_with(&config));
        assert!(user_layouts_dir().ends_with("layouts"));
    }

    #[test]
    fn test_find_layout_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let layout_path = temp_dir.path().join("test.toml");
        fs::write(&layout_path, "name = \"test\"").unwrap();

        let found = find_layout(layout_path.to_str().unwrap());
        assert_eq!(found, Some(layout_path));
    }

    #[test]
    fn test_find_layout_not_found() {
        assert!(find_layout("nonexistent_layout_12345").is_none());
    }

    #[test]
    fn test_find_layout_in_dir_adds_extension() {
        let temp_dir = TempDir::new().unwrap();
        let layout_path = temp_dir.path().join("studio.toml");
        fs::write(&layout_path, "name = \"studio\"").unwrap();

        assert_eq!(find_layout_in_dir(temp_dir.path(), "studio"), Some(layout_path.clone()));
        assert_eq!(find_layout_in_dir(temp_dir.path(), "studio.toml"), Some(layout_path));
        assert!(find_layout_in_dir(temp_dir.path(), "other").is_none());
    }

    #[test]
    fn test_list_layouts_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.toml"), "").unwrap();
        fs::write(temp_dir.path().join("a.toml"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("dir.toml")).unwrap();

        let layouts = list_layouts_in_dir(temp_dir.path());
        let names: Vec<_> = layouts.iter().filter_map(|p| layout_name_from_path(p)).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_list_layouts_nonexistent_dir() {
        assert!(list_layouts_in_dir(Path::new("/nonexistent/path/12345")).is_empty());
    }

    #[test]
    fn test_layout_name_from_path() {
        assert_eq!(layout_name_from_path(Path::new("simple.toml")), Some("simple".to_string()));
        assert_eq!(layout_name_from_path(Path::new("/")), None);
    }
}
