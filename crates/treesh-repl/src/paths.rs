//! XDG Base Directory paths for treesh.
//!
//! | Purpose | XDG Variable | Default | treesh Path |
//! |---------|--------------|---------|-------------|
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/treesh/config.toml` |
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/treesh/history.txt` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/treesh` or falls back to `~/.config/treesh`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join("treesh")
}

/// Get the data directory.
///
/// Uses `$XDG_DATA_HOME/treesh` or falls back to `~/.local/share/treesh`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("treesh")
}

/// Default config file location.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Line-editor history file.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

/// Fallback home directory when BaseDirs fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
}
