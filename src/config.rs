//! User configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::converter;
use crate::error::{Error, Result};
use crate::history::DEFAULT_CAPACITY;
use crate::session::Theme;

lazy_static! {
    static ref CURRENCY_CODE: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Currency the typed amount is in.
    pub source: String,
    /// Currency the amount is converted into.
    pub target: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source: converter::BASE_CURRENCY.to_string(),
            target: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub history_capacity: usize,
    pub converter: ConverterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            history_capacity: DEFAULT_CAPACITY,
            converter: ConverterConfig::default(),
        }
    }
}

impl Config {
    /// Load from `explicit_path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match explicit_path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/calcdeck/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcdeck").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::config("history_capacity must be at least 1"));
        }

        for code in [&self.converter.source, &self.converter.target] {
            if !CURRENCY_CODE.is_match(code) {
                return Err(Error::config(format!(
                    "currency code '{}' must be three uppercase letters",
                    code
                )));
            }
            converter::lookup(code)?;
        }

        Ok(())
    }
}
