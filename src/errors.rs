/*!
 * Error types for the potwriter application.
 *
 * Entry formatting itself cannot fail; these errors cover the code around
 * it: reading entry files, validating configuration and writing catalogs.
 * Defined with the thiserror crate.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Entry input could not be parsed
    #[error("Invalid entry input in {file}: {reason}")]
    InvalidInput {
        /// File the entries were read from
        file: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// Create an InvalidInput error from a file path and reason
    pub fn invalid_input(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from catalog processing
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<CatalogError>() {
            Ok(catalog_error) => Self::Catalog(catalog_error),
            Err(other) => Self::Unknown(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
