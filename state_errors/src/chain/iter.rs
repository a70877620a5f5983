//! Borrowing traversal of a [`FailureChain`].

use std::iter::FusedIterator;

use super::FailureChain;

/// Iterator over the nodes of a [`FailureChain`] in link order.
///
/// Created by [`FailureChain::iter`].
#[derive(Clone, Debug)]
pub struct ChainIter<'a> {
    next: Option<&'a FailureChain>,
}

impl<'a> ChainIter<'a> {
    pub(super) const fn new(head: &'a FailureChain) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a FailureChain;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        Some(node)
    }
}

impl FusedIterator for ChainIter<'_> {}
