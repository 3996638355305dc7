//! REPL configuration, read from `config.toml`.
//!
//! ```toml
//! prompt = "{cwd} $ "
//! history = true
//! color = true
//! history_limit = 500
//! seed_dirs = ["/home", "/tmp"]
//! ```
//!
//! Every key is optional. `{cwd}` in the prompt is replaced with the current
//! directory before each line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use treesh_kernel::tools::DEFAULT_HISTORY_LIMIT;
use treesh_kernel::KernelConfig;

use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Prompt text; `{cwd}` expands to the current directory.
    pub prompt: String,
    /// Persist line-editor history between sessions.
    pub history: bool,
    /// Color error messages.
    pub color: bool,
    /// Lines kept for the `history` command.
    pub history_limit: usize,
    /// Directories created before the first command.
    pub seed_dirs: Vec<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            history: true,
            color: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed_dirs: Vec::new(),
        }
    }
}

impl ReplConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = paths::config_file();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Kernel settings derived from this config.
    pub fn kernel_config(&self) -> KernelConfig {
        KernelConfig {
            name: "repl".to_string(),
            history_limit: self.history_limit,
            seed: self.seed_dirs.clone(),
        }
    }

    /// The prompt with `{cwd}` expanded.
    pub fn render_prompt(&self, cwd: &str) -> String {
        self.prompt.replace("{cwd}", cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(ReplConfig::from_toml("").unwrap(), ReplConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ReplConfig::from_toml("prompt = \"> \"\nseed_dirs = [\"/tmp\"]").unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.seed_dirs, vec!["/tmp"]);
        assert!(config.history);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ReplConfig::from_toml("colour = false").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(ReplConfig::from_toml("history = \"yes\"").is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        let config = ReplConfig::load(Some(file.path())).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReplConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("reading config file"));
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prompt = [").unwrap();
        let err = ReplConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config file"));
    }

    #[test]
    fn prompt_expands_cwd() {
        let config = ReplConfig {
            prompt: "{cwd} $ ".to_string(),
            ..ReplConfig::default()
        };
        assert_eq!(config.render_prompt("/a/b"), "/a/b $ ");
    }

    #[test]
    fn kernel_config_carries_seed() {
        let config = ReplConfig {
            seed_dirs: vec!["/home".to_string()],
            history_limit: 10,
            ..ReplConfig::default()
        };
        let kernel = config.kernel_config();
        assert_eq!(kernel.seed, vec!["/home"]);
        assert_eq!(kernel.history_limit, 10);
    }
}
