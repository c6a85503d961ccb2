//! Error types for cflr-core

use thiserror::Error;

/// Result type alias for cflr-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cflr-core
#[derive(Error, Debug)]
pub enum Error {
    /// A required credential is absent from the environment
    #[error("missing {name} environment variable")]
    MissingCredential {
        /// Name of the environment variable
        name: &'static str,
    },

    /// Settings file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML settings
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// The API answered with `success: false`
    #[error("API error: {message}")]
    Api {
        /// First error message reported by the API
        message: String,
    },

    /// Transport failure or non-2xx HTTP status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
