//! Canonical failure sets mirrored by the list and chain test suites.

use state_errors::{FailureChain, Severity, StateError, StateErrorBuilder, StateErrors};

/// Three failures in the order three independent checks report them.
pub const THREE_CHECKS: [(Severity, &str); 3] = [
    (Severity::Degraded, "multiple"),
    (Severity::Degraded, "another error"),
    (Severity::Unavailable, "for some reason"),
];

/// The [`THREE_CHECKS`] failures as a list.
#[must_use]
pub fn three_check_list() -> StateErrors {
    StateErrorBuilder::new()
        .add(
            THREE_CHECKS
                .iter()
                .map(|&(severity, message)| StateError::new(severity, message)),
        )
        .build()
}

/// The [`THREE_CHECKS`] failures as a chain.
#[must_use]
pub fn three_check_chain() -> FailureChain {
    let [(severity, message), rest @ ..] = THREE_CHECKS;
    rest.into_iter()
        .fold(FailureChain::new(severity, message), |chain, (s, m)| {
            chain.chain(FailureChain::new(s, m))
        })
}

/// A lone degraded failure, as returned by a single failing check.
#[must_use]
pub fn single_failure() -> StateError {
    StateError::degraded("first single error")
}

/// Collects the messages of `errors` in order.
#[must_use]
pub fn messages(errors: &StateErrors) -> Vec<&str> {
    errors.iter().map(StateError::message).collect()
}
