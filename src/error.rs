//! Error types and handling for `TravelAtlas`
//!
//! The resolution core is total and never fails; these errors only come out
//! of configuration and dataset loading.

use thiserror::Error;

/// Main error type for the `TravelAtlas` application
#[derive(Error, Debug)]
pub enum TravelAtlasError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset parsing errors (CSV or GeoJSON)
    #[error("Data error: {message}")]
    Data { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelAtlasError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelAtlasError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelAtlasError::Data { message } => {
                format!("Unable to read dataset: {message}")
            }
            TravelAtlasError::Io { .. } => {
                "File operation failed. Please check the dataset paths and permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for TravelAtlasError {
    fn from(err: serde_json::Error) -> Self {
        TravelAtlasError::data(format!("invalid GeoJSON: {err}"))
    }
}
