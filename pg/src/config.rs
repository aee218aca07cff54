//! PromptGen configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use questionset::{DEFAULT_CATEGORIES_PATH, ParseMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::clipboard::ClipboardMode;
use crate::prompt::{DEFAULT_RESPONSE_LANGUAGE, PromptTemplate};

const LOCAL_CONFIG: &str = ".promptgen.yml";

/// Main PromptGen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category document to load
    #[serde(rename = "categories-file")]
    pub categories_file: PathBuf,

    /// Which parser reads the category document
    #[serde(rename = "parse-mode")]
    pub parse_mode: ParseMode,

    /// Clipboard detection
    pub clipboard: ClipboardMode,

    /// Retro loading effects
    pub effects: bool,

    /// Language the advice should be written in
    #[serde(rename = "response-language")]
    pub response_language: String,

    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories_file: PathBuf::from(DEFAULT_CATEGORIES_PATH),
            parse_mode: ParseMode::default(),
            clipboard: ClipboardMode::default(),
            effects: true,
            response_language: DEFAULT_RESPONSE_LANGUAGE.to_string(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        debug!(?config_path, "Config::load: called");
        // An explicit config path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::implicit_paths() {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {:#}", candidate.display(), e),
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Peek at `log-level` before logging is set up
    ///
    /// Follows the same chain as [`Config::load`] but never fails.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let paths = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::implicit_paths(),
        };
        paths
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|config| config.log_level)
    }

    /// `./.promptgen.yml`, then `<config_dir>/promptgen/promptgen.yml`
    fn implicit_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("promptgen").join("promptgen.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Command-line flags win over the file
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.categories {
            debug!(?path, "Config::apply_cli: categories override");
            self.categories_file = path.clone();
        }
        if let Some(mode) = cli.parse_mode {
            self.parse_mode = mode;
        }
        if cli.no_clipboard {
            self.clipboard = ClipboardMode::Off;
        }
        if cli.no_effects {
            self.effects = false;
        }
        self
    }

    pub fn template(&self) -> PromptTemplate {
        PromptTemplate::new(self.response_language.clone())
    }
}
