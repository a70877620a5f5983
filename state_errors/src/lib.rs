//! Degraded and unavailable state failures, aggregated two ways.
//!
//! A check that fails reports a [`Severity`] and a message. When several
//! checks fail, their failures are combined either as:
//!
//! * a flat [`StateErrors`] list, accumulated with [`StateErrorBuilder`]; or
//! * a linked [`FailureChain`], grown with [`FailureChain::append`] and merged
//!   from opaque error values with [`join`].
//!
//! Either aggregate reduces to a [`StatusSummary`] holding at most one
//! combined reason per severity.
//!
//! ```
//! use state_errors::{FailureChain, StateErrorBuilder, StatusSummary};
//!
//! let list = StateErrorBuilder::new()
//!     .add_degraded("cache is cold")
//!     .add_unavailable("database unreachable")
//!     .build();
//!
//! let chain = FailureChain::degraded("cache is cold")
//!     .chain(FailureChain::unavailable("database unreachable"));
//!
//! assert_eq!(StatusSummary::from(&list), StatusSummary::from(&chain));
//! ```
//!
//! The crate logs through [`tracing`] and never installs a subscriber.

mod chain;
mod format;
mod list;
mod severity;
mod summary;

pub use chain::{
    ChainIter, FailureChain, JoinError, JoinOperand, StateFailure, join, join_all, try_join,
};
pub use format::{
    DEFAULT_CHAIN_SEPARATOR, DEFAULT_REASON_SEPARATOR, ENV_PREFIX, ReportFormat,
    ReportFormatError,
};
pub use list::{StateError, StateErrorBuilder, StateErrors};
pub use severity::{Failure, ParseSeverityError, Severity};
pub use summary::StatusSummary;
