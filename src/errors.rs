/*!
 * Error types for the transwidget application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when building or sending the request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors raised by the widget controller while handling user interaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Source and target selectors hold the same language
    #[error("Source language and target language cannot be the same. Please select different languages.")]
    SameLanguage {
        /// The language selected on both sides
        language: String,
    },

    /// A notification that must be acknowledged is still open
    #[error("Pending notification must be acknowledged first: {0}")]
    AwaitingAcknowledgement(String),

    /// The requested code is not one of the selector's options
    #[error("Unknown language option: {0}")]
    UnknownLanguage(String),

    /// A selector was built without any options
    #[error("Language selector has no options")]
    NoLanguageOptions,

    /// Handlers were detached and the widget no longer accepts events
    #[error("Widget has been detached")]
    Detached,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a translation backend
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from the widget controller
    #[error("Widget error: {0}")]
    Widget(#[from] WidgetError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
