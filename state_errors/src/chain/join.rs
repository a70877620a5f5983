//! Merging failures that arrive as opaque error values.
//!
//! Producers often return `Box<dyn Error>` rather than a concrete chain.
//! [`StateFailure`] recovers the chain when there is one so that [`join`]
//! can splice it; anything else is carried through untouched.

use std::{error::Error, fmt};

use thiserror::Error;

use super::FailureChain;

/// A failure handle that is either a [`FailureChain`] or some other error.
#[derive(Debug, Error)]
pub enum StateFailure {
    /// A recovered state failure chain.
    #[error(transparent)]
    Chain(FailureChain),
    /// Any error that is not a state failure chain.
    #[error(transparent)]
    Other(Box<dyn Error + Send + Sync>),
}

impl StateFailure {
    /// Recovers a [`FailureChain`] from a boxed error when it holds one.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_errors::{FailureChain, StateFailure};
    ///
    /// let boxed: Box<dyn std::error::Error + Send + Sync> =
    ///     Box::new(FailureChain::degraded("slow"));
    /// assert!(StateFailure::from_boxed(boxed).as_chain().is_some());
    ///
    /// let other: Box<dyn std::error::Error + Send + Sync> = "plain".into();
    /// assert!(StateFailure::from_boxed(other).as_chain().is_none());
    /// ```
    #[must_use]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync>) -> Self {
        match error.downcast::<FailureChain>() {
            Ok(chain) => Self::Chain(*chain),
            Err(other) => match other.downcast::<Self>() {
                Ok(failure) => *failure,
                Err(unrecognised) => Self::Other(unrecognised),
            },
        }
    }

    /// Borrow the chain, if this handle holds one.
    #[must_use]
    pub const fn as_chain(&self) -> Option<&FailureChain> {
        match self {
            Self::Chain(chain) => Some(chain),
            Self::Other(_) => None,
        }
    }

    /// Take the chain out, or give the handle back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` when the handle is not a chain.
    pub fn into_chain(self) -> Result<FailureChain, Self> {
        match self {
            Self::Chain(chain) => Ok(chain),
            other @ Self::Other(_) => Err(other),
        }
    }
}

impl From<FailureChain> for StateFailure {
    fn from(chain: FailureChain) -> Self {
        Self::Chain(chain)
    }
}

/// Appends `second` to the tail of `first` when both are chains.
///
/// The operation is lenient:
///
/// * when `first` is a chain, a chain `second` is spliced after its tail and
///   a non-chain `second` is dropped;
/// * when `first` is absent or not a chain, it is returned unchanged and
///   `second` is dropped, whatever it holds.
///
/// Every drop is logged at `warn` level. Use [`try_join`] to have it
/// reported as an error instead.
///
/// # Examples
///
/// ```
/// use state_errors::{FailureChain, StateFailure, join};
///
/// let first = Some(FailureChain::degraded("multiple").into());
/// let second = Some(FailureChain::unavailable("for some reason").into());
/// let joined = join(first, second);
/// let chain = joined.as_ref().and_then(StateFailure::as_chain);
/// assert_eq!(chain.map(FailureChain::len), Some(2));
/// ```
#[must_use]
pub fn join(first: Option<StateFailure>, second: Option<StateFailure>) -> Option<StateFailure> {
    match first {
        Some(StateFailure::Chain(mut head)) => {
            match second {
                Some(StateFailure::Chain(tail)) => {
                    head.append(tail);
                }
                Some(dropped @ StateFailure::Other(_)) => {
                    tracing::warn!(%dropped, "second operand is not a state failure chain; dropping it");
                }
                None => {}
            }
            Some(StateFailure::Chain(head))
        }
        unchanged => {
            if let Some(dropped) = second {
                tracing::warn!(%dropped, "first operand is not a state failure chain; dropping second operand");
            }
            unchanged
        }
    }
}

/// Left-folds `failures` with [`join`], ignoring absent entries.
///
/// The first present failure becomes the head. Returns `None` when every
/// entry is absent.
#[must_use]
pub fn join_all<I>(failures: I) -> Option<StateFailure>
where
    I: IntoIterator<Item = Option<StateFailure>>,
{
    let mut present = failures.into_iter().flatten();
    let head = present.next();
    present.fold(head, |acc, next| join(acc, Some(next)))
}

/// Which argument of [`try_join`] could not be merged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JoinOperand {
    /// The receiving operand.
    First,
    /// The operand being appended.
    Second,
}

impl fmt::Display for JoinOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// Failure of the strict [`try_join`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JoinError {
    /// An operand was not a state failure chain, so merging would lose it.
    #[error("{operand} operand is not a state failure chain: {failure}")]
    NotAChain {
        /// The offending argument.
        operand: JoinOperand,
        /// The failure that could not be merged.
        failure: StateFailure,
        /// The other argument, handed back unmodified.
        other: Option<StateFailure>,
    },
}

/// Strict counterpart of [`join`] that never discards a failure.
///
/// Absent operands are skipped, so `try_join(None, x)` yields `x`.
///
/// # Errors
///
/// Returns [`JoinError::NotAChain`] when both operands are present and
/// either of them is not a chain. Both operands are handed back inside the
/// error.
pub fn try_join(
    first: Option<StateFailure>,
    second: Option<StateFailure>,
) -> Result<Option<StateFailure>, JoinError> {
    match (first, second) {
        (None, only) | (only, None) => Ok(only),
        (Some(StateFailure::Chain(mut head)), Some(StateFailure::Chain(tail))) => {
            head.append(tail);
            Ok(Some(StateFailure::Chain(head)))
        }
        (Some(failure @ StateFailure::Other(_)), other) => Err(JoinError::NotAChain {
            operand: JoinOperand::First,
            failure,
            other,
        }),
        (Some(head @ StateFailure::Chain(_)), Some(failure)) => Err(JoinError::NotAChain {
            operand: JoinOperand::Second,
            failure,
            other: Some(head),
        }),
    }
}
