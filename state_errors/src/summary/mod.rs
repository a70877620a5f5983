//! Per-severity reduction of failure aggregates.

use serde::{Deserialize, Serialize};

use crate::{
    chain::FailureChain,
    format::ReportFormat,
    list::StateErrors,
    severity::{Failure, Severity},
};

/// At most one combined reason per severity.
///
/// Individual failures are not preserved; messages of the same severity
/// are concatenated in traversal order.
///
/// # Examples
///
/// ```
/// use state_errors::{StateErrorBuilder, StatusSummary};
///
/// let errors = StateErrorBuilder::new()
///     .add_degraded("x")
///     .add_unavailable("y")
///     .add_degraded("z")
///     .build();
/// let summary = StatusSummary::from(&errors);
/// assert_eq!(summary.degraded_reason.as_deref(), Some("x, z"));
/// assert_eq!(summary.unavailable_reason.as_deref(), Some("y"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatusSummary {
    /// Combined messages of every degraded failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<String>,
    /// Combined messages of every unavailable failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
}

impl StatusSummary {
    /// Reduces `failures` using the default `", "` separator.
    #[must_use]
    pub fn reduce<I>(failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Failure,
    {
        Self::reduce_with(failures, &ReportFormat::default())
    }

    /// Reduces `failures`, joining reasons with `format`'s reason separator.
    #[must_use]
    pub fn reduce_with<I>(failures: I, format: &ReportFormat) -> Self
    where
        I: IntoIterator,
        I::Item: Failure,
    {
        let mut degraded = Vec::new();
        let mut unavailable = Vec::new();
        for failure in failures {
            let message = failure.message().to_owned();
            match failure.severity() {
                Severity::Degraded => degraded.push(message),
                Severity::Unavailable => unavailable.push(message),
            }
        }
        let combine = |reasons: Vec<String>| {
            (!reasons.is_empty()).then(|| reasons.join(&format.reason_separator))
        };
        Self {
            degraded_reason: combine(degraded),
            unavailable_reason: combine(unavailable),
        }
    }

    /// Combined reason recorded for `severity`, if any.
    #[must_use]
    pub fn reason(&self, severity: Severity) -> Option<&str> {
        match severity {
            Severity::Degraded => self.degraded_reason.as_deref(),
            Severity::Unavailable => self.unavailable_reason.as_deref(),
        }
    }

    /// The most severe level with a recorded reason.
    #[must_use]
    pub const fn worst(&self) -> Option<Severity> {
        if self.unavailable_reason.is_some() {
            Some(Severity::Unavailable)
        } else if self.degraded_reason.is_some() {
            Some(Severity::Degraded)
        } else {
            None
        }
    }

    /// Returns `true` when no reason of either severity was recorded.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.worst().is_none()
    }
}

impl From<&StateErrors> for StatusSummary {
    fn from(errors: &StateErrors) -> Self {
        Self::reduce(errors)
    }
}

impl From<&FailureChain> for StatusSummary {
    fn from(chain: &FailureChain) -> Self {
        Self::reduce(chain)
    }
}
