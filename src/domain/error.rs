//! Error types for the login gate plugin.
//!
//! Validation never fails; errors only come from the session store, the
//! filesystem, theme loading, and configuration parsing.

use thiserror::Error;

/// The main error type for login gate operations.
///
/// # Examples
///
/// ```
/// use logingate::LoginGateError;
///
/// fn read_session() -> Result<(), LoginGateError> {
///     Err(LoginGateError::Storage("Failed to read file".to_string()))
/// }
/// assert!(read_session().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LoginGateError {
    /// Reading or writing the session store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for login gate operations.
pub type Result<T> = std::result::Result<T, LoginGateError>;
