//! Error types for the Leave Coverage Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during reconciliation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Leave Coverage Reconciliation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// A reference window had its start date after its end date.
    #[error("Invalid reference window: start {start} is after end {end}")]
    InvalidWindow {
        /// The window start date.
        start: NaiveDate,
        /// The window end date.
        end: NaiveDate,
    },

    /// A leave interval had its start date after its end date.
    #[error("Invalid leave interval '{reference_id}': start {start} is after end {end}")]
    InvalidInterval {
        /// The reference identifier of the offending record.
        reference_id: String,
        /// The interval start date.
        start: NaiveDate,
        /// The interval end date.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
