//! User configuration loaded from `~/.pcforge/config.toml`

use crate::catalog::StaticCatalog;
use crate::error::BuilderError;
use crate::error::Result;
use crate::price::Price;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `warn` or `pcforge_core=debug`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub currency_symbol: String,
    /// Catalog file replacing the builtin catalog
    pub catalog_path: Option<PathBuf>,
    pub logging: LogConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            catalog_path: None,
            logging: LogConfig::default(),
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the default location
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "Loaded config from {}", path.display()),
            Self::Defaults(path) => write!(f, "No config at {}, using defaults", path.display()),
        }
    }
}

impl BuilderConfig {
    /// `~/.pcforge/config.toml`, or a path relative to the working directory
    /// when no home directory is known
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".pcforge"))
            .unwrap_or_else(|| PathBuf::from(".pcforge"))
            .join("config.toml")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and defaults are used when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_source(explicit).map(|(config, _)| config)
    }

    /// Like [`BuilderConfig::load`], also reporting which file was used.
    ///
    /// Nothing is logged here; configuration is read before a subscriber
    /// exists, so callers report the source once logging is set up.
    pub fn load_with_source(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(BuilderError::ConfigNotFound(path.to_path_buf()));
                }
                Ok((Self::from_path(path)?, ConfigSource::File(path.to_path_buf())))
            }
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Ok((Self::from_path(&path)?, ConfigSource::File(path)))
                } else {
                    Ok((Self::default(), ConfigSource::Defaults(path)))
                }
            }
        }
    }

    /// Parse a config file; a relative `catalog_path` is resolved against
    /// the file's directory
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        if let Some(catalog) = config.catalog_path.as_mut()
            && catalog.is_relative()
            && let Some(dir) = path.parent()
        {
            *catalog = dir.join(&*catalog);
        }
        Ok(config)
    }

    /// The configured catalog, or the builtin one
    pub fn catalog(&self) -> Result<StaticCatalog> {
        match &self.catalog_path {
            Some(path) => StaticCatalog::from_path(path),
            None => Ok(StaticCatalog::builtin()),
        }
    }

    pub fn format_price(&self, price: Price) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}
