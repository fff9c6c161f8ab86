//! Error types for the attributer crate.
//!
//! Generation, assignment, and option parsing all report failures through
//! [`AttrError`]. Processing hooks report their own failures as
//! [`ProcessError`], which generation propagates unchanged.

use thiserror::Error;

use crate::kind::{Kind, Value};

/// Errors raised while configuring, generating, or assigning attribute values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttrError {
    /// A value of the wrong kind was assigned to an attribute.
    #[error("set attribute '{name}': value {actual} is not {expected}")]
    KindMismatch {
        /// Name of the attribute the value was assigned to.
        name: String,
        /// Kind the attribute is fixed to.
        expected: Kind,
        /// The rejected value.
        actual: Value,
    },

    /// A fixed-sequence attribute was configured without presets.
    #[error("attribute '{name}' requires at least one preset value")]
    EmptySequence {
        /// Name of the misconfigured attribute.
        name: String,
    },

    /// An auto-increment counter has already produced its maximum value.
    #[error("attribute '{name}' counter cannot advance past its maximum")]
    CounterOverflow {
        /// Name of the exhausted attribute.
        name: String,
    },

    /// Attribute options could not be parsed.
    #[error("invalid attribute options: {message}")]
    InvalidOptions {
        /// Description of the parse error.
        message: String,
    },

    /// A processing hook rejected the generated value.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Failure reported by a processing hook.
///
/// # Example
///
/// ```
/// use attributer::ProcessError;
///
/// let err = ProcessError::new("price must be positive");
/// assert_eq!(err.to_string(), "price must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProcessError {
    message: String,
}

impl ProcessError {
    /// Creates a hook failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ProcessError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ProcessError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
