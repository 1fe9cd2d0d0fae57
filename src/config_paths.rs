//! Where pixruler keeps its files
//!
//! ```text
//! <config dir>/
//!   config.yaml
//!   themes/<id>.yaml
//!   logs/pixruler.log.YYYY-MM-DD
//! ```
//!
//! The config dir is `$XDG_CONFIG_HOME/pixruler`, else `~/.config/pixruler`;
//! on Windows `%APPDATA%\pixruler`.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "pixruler";

/// Pick the config dir from an explicit base (XDG or APPDATA) or the home dir
fn resolve_config_dir(base: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    base.filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|dir| dir.join(APP_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);

    resolve_config_dir(base, dirs::home_dir())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// User theme file for a theme id
pub fn theme_file(id: &str) -> Option<PathBuf> {
    themes_dir().map(|dir| dir.join(format!("{}.yaml", id)))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn create_dir(path: &Path) -> Result<PathBuf, String> {
    std::fs::create_dir_all(path)
        .map(|_| path.to_path_buf())
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs dir (and its parents), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    create_dir(&logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        let dir = resolve_config_dir(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(dir, Some(PathBuf::from("/xdg/pixruler")));
    }

    #[test]
    fn test_empty_base_falls_back_to_home() {
        let dir = resolve_config_dir(Some(PathBuf::new()), Some("/home/me".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/me/.config/pixruler")));
        assert_eq!(resolve_config_dir(None, None), None);
    }

    #[test]
    fn test_theme_file_name() {
        if let Some(path) = theme_file("night") {
            assert!(path.ends_with("themes/night.yaml"));
        }
    }
}
