//! Chain nodes, tail appends and reporting.

use std::fmt;

use thiserror::Error;

use super::ChainIter;
use crate::{
    format::ReportFormat,
    list::{StateError, StateErrors},
    severity::{Failure, Severity},
};

/// One failure plus exclusive ownership of the failures after it.
///
/// The successor is exposed through [`std::error::Error::source`], so
/// generic error reporters walk the whole chain.
///
/// # Examples
///
/// ```
/// use state_errors::FailureChain;
///
/// let mut head = FailureChain::degraded("multiple");
/// head.append(FailureChain::degraded("another error"))
///     .append(FailureChain::unavailable("for some reason"));
///
/// assert_eq!(head.len(), 3);
/// assert_eq!(
///     head.report(),
///     "WrappedStateError: degraded: multiple->\
///      WrappedStateError: degraded: another error->\
///      WrappedStateError: unavailable: for some reason"
/// );
/// ```
#[derive(Error)]
#[error("WrappedStateError: {severity}: {message}")]
pub struct FailureChain {
    severity: Severity,
    message: String,
    #[source]
    next: Option<Box<Self>>,
}

impl FailureChain {
    /// Construct a single-node chain.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            next: None,
        }
    }

    /// Construct a single [`Severity::Degraded`] node.
    #[must_use]
    pub fn degraded(message: impl Into<String>) -> Self {
        Self::new(Severity::Degraded, message)
    }

    /// Construct a single [`Severity::Unavailable`] node.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Severity::Unavailable, message)
    }

    /// Severity of this node.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Message of this node.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The node following this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Attaches `other` after the current tail.
    ///
    /// `None` leaves the chain untouched. Existing nodes are never
    /// overwritten, so repeated appends keep their call order. Returns the
    /// head so appends can be chained.
    ///
    /// Because `other` is taken by value, a chain cannot be appended to
    /// itself and no cycle can form.
    pub fn append(&mut self, other: impl Into<Option<Self>>) -> &mut Self {
        let Some(appended): Option<Self> = other.into() else {
            return self;
        };
        let mut tail = &mut self.next;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(appended));
        tracing::debug!(length = self.len(), "appended state failure chain");
        self
    }

    /// By-value form of [`FailureChain::append`].
    ///
    /// # Examples
    ///
    /// ```
    /// use state_errors::FailureChain;
    ///
    /// let chain = FailureChain::degraded("a")
    ///     .chain(None::<FailureChain>)
    ///     .chain(FailureChain::unavailable("b"));
    /// assert_eq!(chain.len(), 2);
    /// ```
    #[must_use]
    pub fn chain(mut self, other: impl Into<Option<Self>>) -> Self {
        self.append(other);
        self
    }

    /// Iterate over the nodes in link order, starting with `self`.
    #[must_use = "iterators should be consumed to inspect failures"]
    pub const fn iter(&self) -> ChainIter<'_> {
        ChainIter::new(self)
    }

    /// Number of nodes, including `self`.
    #[must_use]
    #[expect(
        clippy::len_without_is_empty,
        reason = "a chain always holds at least one node"
    )]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Visits nodes in link order until the chain ends or `visit` returns
    /// `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use state_errors::FailureChain;
    ///
    /// let chain = FailureChain::degraded("a")
    ///     .chain(FailureChain::degraded("b"))
    ///     .chain(FailureChain::degraded("c"));
    /// let mut seen = Vec::new();
    /// chain.for_each(|node| {
    ///     seen.push(node.message().to_owned());
    ///     node.message() != "b"
    /// });
    /// assert_eq!(seen, ["a", "b"]);
    /// ```
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Self) -> bool,
    {
        for node in self {
            if !visit(node) {
                tracing::trace!("state failure traversal stopped by visitor");
                break;
            }
        }
    }

    /// Renders every node in link order, separated by `->`.
    #[must_use]
    pub fn report(&self) -> String {
        self.report_with(&ReportFormat::default())
    }

    /// Renders every node in link order using `format`'s chain separator.
    #[must_use]
    pub fn report_with(&self, format: &ReportFormat) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&format.chain_separator)
    }

    /// Flattens the chain into a [`StateErrors`] list in link order.
    #[must_use]
    pub fn into_failures(self) -> StateErrors {
        let mut failures = Vec::new();
        let mut cursor = Some(self);
        while let Some(mut node) = cursor {
            cursor = node.next.take().map(|boxed| *boxed);
            failures.push(StateError::new(
                node.severity,
                std::mem::take(&mut node.message),
            ));
        }
        StateErrors::new(failures)
    }
}

impl Failure for FailureChain {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl<'a> IntoIterator for &'a FailureChain {
    type Item = &'a FailureChain;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ChainIter::new(self)
    }
}

// Clone, equality and Debug walk the chain iteratively, like Drop below.
impl Clone for FailureChain {
    fn clone(&self) -> Self {
        let mut head = Self::new(self.severity, self.message.clone());
        let mut tail = &mut head.next;
        for node in self.iter().skip(1) {
            let copy = tail.insert(Box::new(Self::new(node.severity, node.message.clone())));
            tail = &mut copy.next;
        }
        head
    }
}

impl PartialEq for FailureChain {
    fn eq(&self, other: &Self) -> bool {
        fn key(node: &FailureChain) -> (Severity, &str) {
            (node.severity, &node.message)
        }
        self.iter().map(key).eq(other.iter().map(key))
    }
}

impl Eq for FailureChain {}

impl fmt::Debug for FailureChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(NodeView)).finish()
    }
}

/// Debug view of a single node, without its successor.
struct NodeView<'a>(&'a FailureChain);

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureChain")
            .field("severity", &self.0.severity)
            .field("message", &self.0.message)
            .finish()
    }
}

impl Drop for FailureChain {
    // Unlinks iteratively so long chains do not recurse once per node.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
