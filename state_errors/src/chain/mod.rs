//! Linked aggregation of state failures.
//!
//! A [`FailureChain`] is a head node that owns its successor, which owns its
//! own successor, and so on. Absence of failure is `None` at the variable
//! level; there is no empty chain. Chains from independent producers are
//! combined with [`FailureChain::append`] or, when only an opaque error is
//! at hand, with [`join`].

mod iter;
mod join;
mod node;

pub use iter::ChainIter;
pub use join::{JoinError, JoinOperand, StateFailure, join, join_all, try_join};
pub use node::FailureChain;
