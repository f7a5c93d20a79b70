//! Error types for the Commission Report Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The aggregation core itself is total over its input domain and never
//! produces these errors; they arise only at the API boundary, when a
//! caller-supplied quarter filter cannot be parsed.

use thiserror::Error;

/// The main error type for the Commission Report Engine.
///
/// # Example
///
/// ```
/// use commission_engine::error::EngineError;
///
/// let error = EngineError::InvalidQuarterLabel {
///     value: "2024-Q9".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid quarter label '2024-Q9': expected the form YYYY-Qn with n in 1..=4"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A quarter filter string did not have the `YYYY-Qn` form.
    #[error("Invalid quarter label '{value}': expected the form YYYY-Qn with n in 1..=4")]
    InvalidQuarterLabel {
        /// The string that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
