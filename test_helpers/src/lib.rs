//! Test helpers shared across crates in the state-errors workspace.
//!
//! [`fixtures`] builds the canonical failure sets used throughout the test
//! suites, and [`figment`] wraps `figment::Jail` for tests that drive
//! configuration through environment variables.

pub mod figment;
pub mod fixtures;
