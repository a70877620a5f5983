//! Flat, ordered aggregation of state failures.
//!
//! Producers either return a single [`StateError`], or accumulate several
//! through [`StateErrorBuilder`] into a [`StateErrors`] list. An empty list
//! means "no failure".

mod builder;
mod error;
mod errors;

pub use builder::StateErrorBuilder;
pub use error::StateError;
pub use errors::StateErrors;

#[cfg(test)]
mod tests;
