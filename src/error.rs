use thiserror::Error;

/// Errors that can occur while loading search data or configuration
///
/// The matching functions themselves never fail; only the edges that touch
/// files, JSON payloads or configuration return this type.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to read a data file
    #[error("Failed to read data: {0}")]
    Io(#[from] std::io::Error),

    /// Payload was not a valid recipe or dishlist array
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// No data source was given on the command line or in configuration
    #[error("Missing data source: {0}")]
    MissingData(String),
}
