//! Unit tests for report format loading.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy lints are denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    clippy::panic_in_result_fn,
    reason = "tests panic to surface loading mistakes"
)]

use figment::{Figment, providers::Serialized};
use rstest::rstest;

use super::{DEFAULT_CHAIN_SEPARATOR, DEFAULT_REASON_SEPARATOR, ReportFormat, ReportFormatError};

#[test]
fn defaults_match_canonical_output() {
    let format = ReportFormat::default();
    assert_eq!(format.chain_separator, DEFAULT_CHAIN_SEPARATOR);
    assert_eq!(format.reason_separator, DEFAULT_REASON_SEPARATOR);
}

#[test]
fn environment_overrides_defaults() {
    figment::Jail::expect_with(|j| {
        j.set_env("STATE_ERRORS_CHAIN_SEPARATOR", "=>");
        let format = ReportFormat::load().map_err(|e| e.to_string())?;
        assert_eq!(format.chain_separator, "=>");
        assert_eq!(format.reason_separator, DEFAULT_REASON_SEPARATOR);
        Ok(())
    });
}

#[rstest]
#[case("STATE_ERRORS_REASON_SEPARATOR", " | ")]
#[case("STATE_ERRORS_REASON_SEPARATOR", ", ")]
#[case("STATE_ERRORS_CHAIN_SEPARATOR", "1")]
#[case("STATE_ERRORS_CHAIN_SEPARATOR", " -> ")]
fn environment_values_are_taken_verbatim(#[case] key: &str, #[case] value: &str) {
    figment::Jail::expect_with(|j| {
        j.set_env(key, value);
        let format = ReportFormat::load().map_err(|e| e.to_string())?;
        let loaded = if key.ends_with("CHAIN_SEPARATOR") {
            format.chain_separator
        } else {
            format.reason_separator
        };
        assert_eq!(loaded, value);
        Ok(())
    });
}

#[test]
fn load_without_environment_yields_defaults() {
    figment::Jail::expect_with(|_| {
        let format = ReportFormat::load().map_err(|e| e.to_string())?;
        assert_eq!(format, ReportFormat::default());
        Ok(())
    });
}

#[rstest]
#[case(serde_json::json!({ "reason_separator": "|" }), "->", "|")]
#[case(serde_json::json!({ "chain_separator": "~" }), "~", ", ")]
#[case(serde_json::json!({}), "->", ", ")]
fn missing_keys_fall_back(
    #[case] provided: serde_json::Value,
    #[case] chain: &str,
    #[case] reason: &str,
) -> Result<(), ReportFormatError> {
    let format = ReportFormat::from_figment(&Figment::from(Serialized::defaults(provided)))?;
    assert_eq!(format.chain_separator, chain);
    assert_eq!(format.reason_separator, reason);
    Ok(())
}

#[test]
fn wrong_shape_is_reported() {
    let figment = Figment::from(Serialized::defaults(
        serde_json::json!({ "chain_separator": ["a", "b"] }),
    ));
    let err = ReportFormat::from_figment(&figment).expect_err("array is not a separator");
    assert!(matches!(err, ReportFormatError::Extract(_)));
    assert!(err.to_string().starts_with("failed to load report format"));
}
