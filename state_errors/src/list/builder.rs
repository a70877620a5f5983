//! Builder accumulating [`StateError`] values from several producers.
//!
//! Absent inputs (`None`, empty lists) are skipped rather than recorded, so
//! callers can feed the result of every check through the builder without
//! checking for "no failure" first.

use std::fmt;

use super::{StateError, StateErrors};
use crate::severity::Severity;

/// Builder for [`StateErrors`].
///
/// Each method takes the builder by value and returns it, so calls chain
/// fluently. Appends are amortised O(1).
///
/// # Examples
///
/// ```
/// use state_errors::{StateError, StateErrorBuilder, StateErrors};
///
/// let previous: Option<StateErrors> = None;
/// let errors = StateErrorBuilder::new()
///     .append([previous])
///     .add_degraded("multiple")
///     .add_unavailable("for some reason")
///     .add(Some(StateError::degraded("another error")))
///     .build();
///
/// let messages: Vec<_> = errors.iter().map(StateError::message).collect();
/// assert_eq!(messages, ["multiple", "for some reason", "another error"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateErrorBuilder {
    errors: Vec<StateError>,
}

impl StateErrorBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn push(mut self, severity: Severity, message: String) -> Self {
        self.errors.push(StateError::new(severity, message));
        self
    }

    /// Records a [`Severity::Degraded`] failure.
    #[must_use]
    pub fn add_degraded(self, message: impl Into<String>) -> Self {
        self.push(Severity::Degraded, message.into())
    }

    /// Records a [`Severity::Unavailable`] failure.
    #[must_use]
    pub fn add_unavailable(self, message: impl Into<String>) -> Self {
        self.push(Severity::Unavailable, message.into())
    }

    /// Records `error`'s text with `severity` when `error` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_errors::{Severity, StateErrorBuilder};
    ///
    /// let io = std::io::Error::other("disk full");
    /// let errors = StateErrorBuilder::new()
    ///     .add_if_present(Some(&io), Severity::Unavailable)
    ///     .add_if_present(None::<&std::io::Error>, Severity::Degraded)
    ///     .build();
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors.as_slice()[0].message(), "disk full");
    /// ```
    #[must_use]
    pub fn add_if_present<E: fmt::Display>(self, error: Option<E>, severity: Severity) -> Self {
        match error {
            Some(err) => self.push(severity, err.to_string()),
            None => self,
        }
    }

    /// Records the error of `result` with `severity`; `Ok` is a no-op.
    #[must_use]
    pub fn add_if_err<T, E: fmt::Display>(self, result: &Result<T, E>, severity: Severity) -> Self {
        self.add_if_present(result.as_ref().err(), severity)
    }

    /// Records already-built failures verbatim, skipping absent ones.
    ///
    /// Accepts plain [`StateError`] values as well as `Option<StateError>`,
    /// so `None` entries never end up in the list.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "`add` records failures; the builder is not an arithmetic type"
    )]
    pub fn add<I, E>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<StateError>>,
    {
        let present: StateErrors = errors
            .into_iter()
            .filter_map(|candidate| {
                let present: Option<StateError> = candidate.into();
                if present.is_none() {
                    tracing::trace!("skipping absent state error");
                }
                present
            })
            .collect();
        self.append([present])
    }

    /// Appends every failure of each list, in order.
    ///
    /// Absent and empty lists are skipped; an empty iterator is a no-op.
    #[must_use]
    pub fn append<I, L>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<StateErrors>>,
    {
        for list in lists {
            match list.into() {
                Some(errors) if !errors.is_empty() => self.errors.extend(errors),
                _ => tracing::trace!("skipping empty state error list"),
            }
        }
        self
    }

    /// Number of failures recorded so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Snapshot of the failures recorded so far.
    ///
    /// The snapshot is an independent copy; later builder calls do not
    /// affect it.
    #[must_use]
    pub fn result(&self) -> StateErrors {
        StateErrors::new(self.errors.clone())
    }

    /// Consumes the builder, returning the recorded failures.
    #[must_use]
    pub fn build(self) -> StateErrors {
        StateErrors::new(self.errors)
    }
}
