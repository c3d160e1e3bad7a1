//! Centralized configuration paths for sxhkhm
//!
//! Helper files live under:
//! - Unix/macOS: `~/.config/sxhkhm/`
//! - Windows: `%APPDATA%\sxhkhm\`
//!
//! The sxhkd configuration itself defaults to `~/.config/sxhkd/sxhkdrc`.
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "sxhkhm";
const SXHKD_DIR: &str = "sxhkd";
const SXHKD_FILE: &str = "sxhkdrc";

/// Base directory for per-user configuration
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME`
///   - Else: `~/.config`
///
/// Windows:
///   - `%APPDATA%`
fn config_home() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

/// Base config directory for sxhkhm
pub fn config_dir() -> Option<PathBuf> {
    config_home().map(|home| home.join(APP_DIR))
}

/// `~/.config/sxhkhm/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/sxhkhm/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// `~/.config/sxhkd/sxhkdrc`, where sxhkd itself looks by default
pub fn default_sxhkdrc() -> Option<PathBuf> {
    config_home().map(|home| home.join(SXHKD_DIR).join(SXHKD_FILE))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
