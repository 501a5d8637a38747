//! Error types for the recipe browser.
//!
//! This module defines the centralized error type [`RecipeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for recipe browser operations.
///
/// Consolidates every failure that can happen while fetching, decoding, configuring
/// or interpreting user input. None of them is fatal: the event loop logs the error,
/// records it in state where relevant and keeps running.
///
/// # Examples
///
/// ```
/// use epicurious::RecipeError;
///
/// fn validate_page_size(size: usize) -> Result<(), RecipeError> {
///     if size == 0 {
///         return Err(RecipeError::Config("page_size must be at least 1".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The search API answered with a non-success status code.
    #[error("HTTP error! status: {status}")]
    Http {
        /// Status code returned by the server.
        status: u16,
    },

    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a JSON list of recipes.
    ///
    /// Automatically converts from `serde_json::Error` using `#[from]`.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The fetch worker could not be reached or its task died.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A line typed by the user is not a valid command.
    #[error("{0}")]
    Command(String),
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http { status: status.as_u16() },
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for RecipeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized `Result` type for recipe browser operations.
pub type Result<T> = std::result::Result<T, RecipeError>;
