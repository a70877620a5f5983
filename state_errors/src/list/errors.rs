//! Ordered collection of [`StateError`] values and iteration support.

use std::{error::Error, fmt};

use serde::{Deserialize, Serialize};

use super::StateError;

/// Failures gathered from one or more checks, in insertion order.
///
/// Duplicates are kept. An empty list is the "no failure" value; use
/// [`StateErrors::into_result`] to turn it into a `Result`.
///
/// # Examples
///
/// ```
/// use state_errors::{StateError, StateErrors};
///
/// let errors: StateErrors = [
///     StateError::degraded("slow disk"),
///     StateError::unavailable("no network"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(errors.len(), 2);
/// assert!(errors.into_result().is_err());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateErrors(Vec<StateError>);

impl StateErrors {
    /// Create a list from failures already in the desired order.
    #[must_use]
    pub const fn new(errors: Vec<StateError>) -> Self {
        Self(errors)
    }

    /// Iterate over the failures in insertion order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, StateError> {
        self.0.iter()
    }

    /// Number of failures in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no failure was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the failures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StateError] {
        &self.0
    }

    /// `Ok(())` when the list is empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the list itself when it holds at least one failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for StateErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl Error for StateErrors {}

impl From<StateError> for StateErrors {
    fn from(error: StateError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<StateError>> for StateErrors {
    fn from(errors: Vec<StateError>) -> Self {
        Self(errors)
    }
}

impl FromIterator<StateError> for StateErrors {
    fn from_iter<I: IntoIterator<Item = StateError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<StateError> for StateErrors {
    fn extend<I: IntoIterator<Item = StateError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StateErrors {
    type Item = &'a StateError;
    type IntoIter = std::slice::Iter<'a, StateError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for StateErrors {
    type Item = StateError;
    type IntoIter = std::vec::IntoIter<StateError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
