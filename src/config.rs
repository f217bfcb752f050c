//! Configuration management for `TravelAtlas`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelAtlasError;
use crate::atlas::{AliasTable, normalize};
use ::config::{Config, Environment, File};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure for `TravelAtlas`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelAtlasConfig {
    /// Dataset locations
    pub data: DataConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Extra informal → canonical country aliases
    pub aliases: BTreeMap<String, String>,
}

/// Dataset file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Travel-by-month CSV
    #[serde(default = "default_travel_csv")]
    pub travel_csv: String,
    /// Countries GeoJSON feature collection
    #[serde(default = "default_countries_geojson")]
    pub countries_geojson: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_travel_csv() -> String {
    "travel_by_month_clean.csv".to_string()
}

fn default_countries_geojson() -> String {
    "data/countries.geojson".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            travel_csv: default_travel_csv(),
            countries_geojson: default_countries_geojson(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelAtlasConfig {
    /// Load configuration from the given file, or the default location when
    /// `None`, layered under environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(::config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELATLAS_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("TRAVELATLAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelAtlasConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelatlas").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.data.travel_csv.is_empty() {
            self.data.travel_csv = default_travel_csv();
        }
        if self.data.countries_geojson.is_empty() {
            self.data.countries_geojson = default_countries_geojson();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_data()?;
        self.validate_logging()?;
        self.validate_aliases()?;
        Ok(())
    }

    fn validate_data(&self) -> Result<()> {
        if self.data.travel_csv.trim().is_empty() {
            return Err(TravelAtlasError::config("data.travel_csv must not be empty").into());
        }
        if self.data.countries_geojson.trim().is_empty() {
            return Err(
                TravelAtlasError::config("data.countries_geojson must not be empty").into(),
            );
        }
        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelAtlasError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelAtlasError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    fn validate_aliases(&self) -> Result<()> {
        for (from, to) in &self.aliases {
            if normalize(from).is_empty() || normalize(to).is_empty() {
                return Err(TravelAtlasError::config(format!(
                    "Alias '{from}' -> '{to}' has no letters on one side"
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Built-in aliases extended with the configured ones
    #[must_use]
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::with_extra(&self.aliases)
    }
}
