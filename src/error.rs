//! Error types for the Daily Wage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during wage calculation and
//! batch processing.

use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the Daily Wage Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift record contained inconsistent timing data.
    #[error("Invalid shift for partner '{partner_id}': {message}")]
    InvalidShift {
        /// The partner whose shift record was invalid.
        partner_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A storage operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A storage operation did not complete within the allowed time.
    #[error("Lookup timed out after {timeout_ms}ms: {operation}")]
    LookupTimeout {
        /// The operation that timed out.
        operation: String,
        /// The timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The enumeration of partners failed, aborting the batch.
    #[error("Batch aborted: failed to enumerate partners: {message}")]
    BatchEnumerationFailed {
        /// A description of the enumeration failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
