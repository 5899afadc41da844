//! Application configuration module
//!
//! Loading, validating and saving the JSON configuration settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::{CatalogHeader, CatalogKind, LineEnding};
use crate::errors::CatalogError;
use crate::language_utils;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Catalog kind to produce (template or translated)
    #[serde(default)]
    pub catalog_kind: CatalogKind,

    /// Line terminator for written catalogs
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Header entry settings
    #[serde(default)]
    pub header: HeaderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Header entry configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HeaderConfig {
    // @field: Write a header entry at all
    #[serde(default = "default_header_enabled")]
    pub enabled: bool,

    // @field: Project-Id-Version value
    #[serde(default = "default_project_id_version")]
    pub project_id_version: String,

    // @field: Language value (translated catalogs only)
    #[serde(default)]
    pub language: Option<String>,

    // @field: Plural-Forms value
    #[serde(default)]
    pub plural_forms: Option<String>,

    // @field: Charset in Content-Type
    #[serde(default = "default_charset")]
    pub charset: String,
}

impl HeaderConfig {
    // @returns: Catalog header stamped with the current time
    pub fn to_header(&self) -> CatalogHeader {
        let mut header = CatalogHeader::new(self.project_id_version.clone());
        header.language = self.language.clone();
        header.plural_forms = self.plural_forms.clone();
        header.charset = self.charset.clone();
        header
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: default_header_enabled(),
            project_id_version: default_project_id_version(),
            language: None,
            plural_forms: None,
            charset: default_charset(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_header_enabled() -> bool {
    true
}

fn default_project_id_version() -> String {
    "PACKAGE VERSION".to_string()
}

fn default_charset() -> String {
    "UTF-8".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.header.charset.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("header charset must not be empty".to_string()).into());
        }

        if self.header.enabled && self.header.project_id_version.trim().is_empty() {
            return Err(CatalogError::InvalidConfig("header project_id_version must not be empty".to_string()).into());
        }

        if let Some(language) = &self.header.language {
            language_utils::validate_language_code(language)
                .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_kind: CatalogKind::default(),
            line_ending: LineEnding::default(),
            header: HeaderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
