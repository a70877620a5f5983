//! Shared helpers for working with `figment::Jail` in tests.
//!
//! The jail isolates environment variables set by a test, so report format
//! overrides never leak between tests running in the same process.

use anyhow::{Result, anyhow};
use state_errors::{ReportFormat, ReportFormatError};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down automatically once the closure completes, even when
/// the closure returns an error. Failures are converted into `anyhow::Error`
/// values so callers can use the `?` operator without extra boilerplate.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Loads a [`ReportFormat`] after applying `vars` inside a fresh jail.
///
/// # Errors
///
/// Returns an error if the jail fails or the format cannot be extracted.
pub fn load_format_with_env(vars: &[(&str, &str)]) -> Result<ReportFormat> {
    with_jail(|j| {
        for (key, value) in vars {
            j.set_env(key, value);
        }
        ReportFormat::load().map_err(figment_error)
    })
}

/// Converts a [`ReportFormatError`] into a [`figment::Error`] so it can be
/// returned from a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adaptor, which hands over ownership"
)]
#[must_use]
pub fn figment_error(err: ReportFormatError) -> figment::Error {
    figment::Error::from(err.to_string())
}
