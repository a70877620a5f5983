//! Severity classification shared by every failure representation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How badly a component is affected by a failure.
///
/// The set is closed: both the list and chain representations match on it
/// exhaustively.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The component still works, but with reduced functionality.
    Degraded,
    /// The component cannot provide its functionality at all.
    Unavailable,
}

impl Severity {
    /// Lowercase name used when rendering failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_errors::Severity;
    /// assert_eq!(Severity::Unavailable.as_str(), "unavailable");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither severity.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseSeverityError {
    /// The input did not match `degraded` or `unavailable`.
    #[error("unknown severity '{0}': expected 'degraded' or 'unavailable'")]
    Unknown(String),
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::Degraded.as_str()) {
            Ok(Self::Degraded)
        } else if trimmed.eq_ignore_ascii_case(Self::Unavailable.as_str()) {
            Ok(Self::Unavailable)
        } else {
            Err(ParseSeverityError::Unknown(trimmed.to_owned()))
        }
    }
}

/// Read access to the `(severity, message)` pair carried by a failure.
///
/// Implemented by [`crate::StateError`] and by every node of a
/// [`crate::FailureChain`], so summaries can be computed over either.
pub trait Failure {
    /// Severity attached to this failure.
    fn severity(&self) -> Severity;

    /// Free-text explanation for the caller.
    fn message(&self) -> &str;
}

impl<F: Failure + ?Sized> Failure for &F {
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}

#[cfg(test)]
#[allow(
    unfulfilled_lint_expectations,
    reason = "clippy lints are denied globally; tests may not hit those branches"
)]
#[expect(
    clippy::panic_in_result_fn,
    reason = "serde round-trip tests assert inside a Result-returning test"
)]
mod tests {
    use rstest::rstest;

    use super::{ParseSeverityError, Severity};

    #[rstest]
    #[case("degraded", Severity::Degraded)]
    #[case("Unavailable", Severity::Unavailable)]
    #[case("  DEGRADED ", Severity::Degraded)]
    fn parses_known_names(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>(), Ok(expected));
    }

    #[rstest]
    #[case("unavaiable")]
    #[case("")]
    #[case("down")]
    fn rejects_unknown_names(#[case] input: &str) {
        assert_eq!(
            input.parse::<Severity>(),
            Err(ParseSeverityError::Unknown(input.trim().to_owned()))
        );
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(Severity::Degraded.to_string(), "degraded");
        assert_eq!(Severity::Unavailable.to_string(), "unavailable");
    }

    #[test]
    fn serialises_lowercase() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Severity::Unavailable)?, "\"unavailable\"");
        let parsed: Severity = serde_json::from_str("\"degraded\"")?;
        assert_eq!(parsed, Severity::Degraded);
        Ok(())
    }
}
