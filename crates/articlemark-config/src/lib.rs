//! Render-step configuration for articlemark.
//!
//! The parser never sees any of this: colors and table-of-contents options
//! only affect how a parsed document is displayed.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub articles_path: PathBuf,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub toc: TocConfig,
}

/// Display colors, by terminal color name (`red`, `lightblue`, `#ff8800`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Headers, links and the selection highlight.
    pub accent: String,
    /// What each banner/highlight color token is drawn with.
    pub palette: PaletteConfig,
    pub callouts: CalloutColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "cyan".into(),
            palette: PaletteConfig::default(),
            callouts: CalloutColors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub blue: String,
    pub green: String,
    pub red: String,
    pub yellow: String,
    pub purple: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            blue: "blue".into(),
            green: "green".into(),
            red: "red".into(),
            yellow: "yellow".into(),
            purple: "magenta".into(),
        }
    }
}

impl PaletteConfig {
    /// Looks up a token by its lower-case name; unknown names get `blue`.
    pub fn color_for(&self, token: &str) -> &str {
        match token {
            "green" => &self.green,
            "red" => &self.red,
            "yellow" => &self.yellow,
            "purple" => &self.purple,
            _ => &self.blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalloutColors {
    pub tip: String,
    pub warning: String,
    pub info: String,
    pub success: String,
    pub note: String,
}

impl Default for CalloutColors {
    fn default() -> Self {
        Self {
            tip: "yellow".into(),
            warning: "red".into(),
            info: "blue".into(),
            success: "green".into(),
            note: "gray".into(),
        }
    }
}

impl CalloutColors {
    /// Looks up a callout kind by its label, case-insensitively.
    pub fn color_for(&self, label: &str) -> &str {
        match label.to_ascii_lowercase().as_str() {
            "tip" => &self.tip,
            "warning" => &self.warning,
            "info" => &self.info,
            "success" => &self.success,
            _ => &self.note,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub show: bool,
    /// Deepest header level listed (1 to 3).
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            show: true,
            max_level: 3,
        }
    }
}

impl Config {
    pub fn new(articles_path: PathBuf) -> Self {
        Self {
            articles_path,
            theme: ThemeConfig::default(),
            toc: TocConfig::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the articles path
        config.articles_path =
            Self::expand_path(&config.articles_path).unwrap_or(config.articles_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/articlemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
