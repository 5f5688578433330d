//! Configuration file support.

use anyhow::{Context, Result};
use chrono::Locale;
use serde::Deserialize;
use std::path::PathBuf;

use crate::view::parse_locale;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding the note store and logs
    pub dir: Option<PathBuf>,

    /// Editor command for `notes edit`
    pub editor: Option<String>,

    /// Display locale for timestamps (e.g. `en_US`)
    pub locale: Option<String>,

    /// Log level written to the log file
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notepad/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notepad")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/notepad` on Linux)
    /// 4. Current working directory
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join("notepad")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the editor command.
    ///
    /// Precedence order:
    /// 1. Config file `editor` setting
    /// 2. $EDITOR environment variable
    /// 3. $VISUAL environment variable
    /// 4. "vi" as fallback
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| "vi".to_string())
    }

    /// Resolve the display locale.
    ///
    /// Precedence order:
    /// 1. Config file `locale` setting
    /// 2. $LC_ALL, $LC_TIME, $LANG (first one chrono recognizes)
    /// 3. POSIX
    pub fn locale(&self) -> Locale {
        let env_names = ["LC_ALL", "LC_TIME", "LANG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok());

        self.locale
            .clone()
            .into_iter()
            .chain(env_names)
            .find_map(|name| parse_locale(&name))
            .unwrap_or(Locale::POSIX)
    }

    /// Resolve the log level name (validated when the logger starts).
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
