//! Catalogue configuration.
//!
//! The shipped binaries always run with [`CatalogueConfig::default`]; the TOML
//! loader exists so embedders and tests can pick a subset of categories or
//! change presentation without touching code.

use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::Category;
use crate::console::DEFAULT_SEPARATOR_WIDTH;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse catalogue config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown log level '{level}' (expected one of: error, warn, info, debug, trace)")]
    UnknownLogLevel { level: String },

    #[error("Separator width must be at least 1")]
    EmptySeparator,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    /// Categories to run, in order.
    pub categories: Vec<Category>,
    /// Bold/coloured demo banners on stdout.
    pub color: bool,
    pub separator_width: usize,
    /// Filter directive handed to the tracing subscriber.
    pub log_level: String,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        CatalogueConfig {
            categories: Category::ALL.to_vec(),
            color: true,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            log_level: "warn".to_string(),
        }
    }
}

impl CatalogueConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogueConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration restricted to a single category.
    pub fn only(category: Category) -> Self {
        CatalogueConfig {
            categories: vec![category],
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::UnknownLogLevel {
                level: self.log_level.clone(),
            });
        }
        if self.separator_width == 0 {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}
