//! Unit tests for the list builder and collection.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy lints are denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "tests panic to surface aggregation mistakes"
)]

use rstest::{fixture, rstest};

use super::{StateError, StateErrorBuilder, StateErrors};
use crate::Severity;

#[fixture]
fn checks() -> StateErrors {
    StateErrorBuilder::new()
        .add_degraded("multiple")
        .add_degraded("another error")
        .add_unavailable("for some reason")
        .build()
}

fn messages(errors: &StateErrors) -> Vec<&str> {
    errors.iter().map(StateError::message).collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn result_len_matches_number_of_adds(#[case] adds: usize) {
    let builder = (0..adds).fold(StateErrorBuilder::new(), |b, i| {
        if i.is_multiple_of(2) {
            b.add_degraded(format!("d{i}"))
        } else {
            b.add_unavailable(format!("u{i}"))
        }
    });
    let errors = builder.result();
    assert_eq!(errors.len(), adds);
    let expected: Vec<String> = (0..adds)
        .map(|i| if i.is_multiple_of(2) { format!("d{i}") } else { format!("u{i}") })
        .collect();
    assert_eq!(messages(&errors), expected);
}

#[rstest]
fn preserves_call_order_and_severity(checks: StateErrors) {
    let severities: Vec<_> = checks.iter().map(StateError::severity).collect();
    assert_eq!(
        severities,
        [Severity::Degraded, Severity::Degraded, Severity::Unavailable]
    );
    assert_eq!(
        messages(&checks),
        ["multiple", "another error", "for some reason"]
    );
}

#[rstest]
fn append_without_lists_is_noop(checks: StateErrors) {
    let builder = StateErrorBuilder::new()
        .append(Vec::<StateErrors>::new())
        .append([checks.clone()]);
    let before = builder.result();
    let after = builder.append(std::iter::empty::<StateErrors>()).build();
    assert_eq!(before, after);
    assert_eq!(after, checks);
}

#[rstest]
fn append_skips_absent_and_empty_lists(checks: StateErrors) {
    let errors = StateErrorBuilder::new()
        .append([None, Some(StateErrors::default()), Some(checks.clone()), None])
        .build();
    assert_eq!(errors, checks);
}

#[rstest]
fn append_concatenates_in_order(checks: StateErrors) {
    let errors = StateErrorBuilder::new()
        .add(Some(StateError::degraded("first single error")))
        .append([checks.clone(), checks])
        .build();
    assert_eq!(errors.len(), 7);
    assert_eq!(messages(&errors)[0], "first single error");
    assert_eq!(messages(&errors)[4], "multiple");
}

#[test]
fn add_filters_absent_elements() {
    let errors = StateErrorBuilder::new()
        .add([
            None,
            Some(StateError::degraded("kept")),
            None,
            Some(StateError::unavailable("also kept")),
        ])
        .build();
    assert_eq!(messages(&errors), ["kept", "also kept"]);
}

#[test]
fn add_accepts_plain_values() {
    let errors = StateErrorBuilder::new()
        .add([StateError::degraded("a"), StateError::degraded("a")])
        .build();
    assert_eq!(errors.len(), 2, "duplicates are retained");
}

#[test]
fn add_if_present_wraps_error_text() {
    let missing: Option<std::io::Error> = None;
    let errors = StateErrorBuilder::new()
        .add_if_present(missing, Severity::Degraded)
        .add_if_present(Some(std::io::Error::other("disk full")), Severity::Unavailable)
        .build();
    assert_eq!(errors.as_slice(), [StateError::unavailable("disk full")]);
}

#[test]
fn add_if_err_ignores_ok() {
    let ok: Result<u8, String> = Ok(1);
    let err: Result<u8, String> = Err("timeout".to_owned());
    let errors = StateErrorBuilder::new()
        .add_if_err(&ok, Severity::Unavailable)
        .add_if_err(&err, Severity::Degraded)
        .build();
    assert_eq!(errors.as_slice(), [StateError::degraded("timeout")]);
}

#[test]
fn snapshot_is_independent_of_later_adds() {
    let builder = StateErrorBuilder::new().add_degraded("one");
    let snapshot = builder.result();
    let later = builder.add_degraded("two").build();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(later.len(), 2);
}

#[test]
fn empty_builder_yields_no_failure() {
    let builder = StateErrorBuilder::new();
    assert!(builder.is_empty());
    assert_eq!(builder.build().into_result(), Ok(()));
}

#[rstest]
fn display_renders_one_failure_per_line(checks: StateErrors) {
    assert_eq!(
        checks.to_string(),
        "StateError: degraded: multiple\n\
         StateError: degraded: another error\n\
         StateError: unavailable: for some reason"
    );
}

#[test]
fn atomic_failure_renders_variant_tag() {
    assert_eq!(
        StateError::unavailable("for some reason").to_string(),
        "StateError: unavailable: for some reason"
    );
}
