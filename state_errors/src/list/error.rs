//! The atomic failure value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::severity::{Failure, Severity};

/// A single `(severity, message)` failure.
///
/// Values are immutable once built; combine several with
/// [`crate::StateErrorBuilder`].
///
/// # Examples
///
/// ```
/// use state_errors::{Severity, StateError};
///
/// let err = StateError::degraded("cache is cold");
/// assert_eq!(err.severity(), Severity::Degraded);
/// assert_eq!(err.to_string(), "StateError: degraded: cache is cold");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error, Serialize, Deserialize)]
#[error("StateError: {severity}: {message}")]
pub struct StateError {
    severity: Severity,
    message: String,
}

impl StateError {
    /// Construct a failure with an explicit severity.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Construct a [`Severity::Degraded`] failure.
    #[must_use]
    pub fn degraded(message: impl Into<String>) -> Self {
        Self::new(Severity::Degraded, message)
    }

    /// Construct a [`Severity::Unavailable`] failure.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Severity::Unavailable, message)
    }

    /// Severity of this failure.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Message supplied when the failure was created.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Failure for StateError {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        &self.message
    }
}
