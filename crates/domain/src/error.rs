//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid configuration values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for configuration or invariant violations.
    ///
    /// Use this when a value object or configuration cannot be constructed:
    /// - The secret is empty or contains non-digits
    /// - A collection that must be non-empty is empty
    ///
    /// # Example
    /// ```ignore
    /// if tracks.is_empty() {
    ///     return Err(DomainError::validation("at least one track is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl TryFrom<char> for Digit {
    ///     type Error = DomainError;
    ///     fn try_from(c: char) -> Result<Self, Self::Error> {
    ///         if !c.is_ascii_digit() {
    ///             return Err(DomainError::parse(format!("not a digit: {c}")));
    ///         }
    ///         Ok(Self(c))
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
