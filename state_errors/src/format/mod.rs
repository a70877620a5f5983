//! Separators used when rendering aggregates as text.
//!
//! The defaults reproduce the canonical output: chain reports join rendered
//! nodes with `->`, and summaries join reasons of the same severity with
//! `", "`. Deployments can override either separator through environment
//! variables prefixed with `STATE_ERRORS_`.

use std::collections::BTreeMap;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment prefix consulted by [`ReportFormat::load`].
pub const ENV_PREFIX: &str = "STATE_ERRORS_";

/// Separator placed between rendered chain nodes.
pub const DEFAULT_CHAIN_SEPARATOR: &str = "->";

/// Separator placed between reasons sharing a severity.
pub const DEFAULT_REASON_SEPARATOR: &str = ", ";

/// Rendering options for chain reports and status summaries.
///
/// # Examples
///
/// ```
/// use state_errors::{FailureChain, ReportFormat};
///
/// let format = ReportFormat {
///     chain_separator: " | ".to_owned(),
///     ..ReportFormat::default()
/// };
/// let chain = FailureChain::degraded("slow").chain(FailureChain::unavailable("down"));
/// assert_eq!(
///     chain.report_with(&format),
///     "WrappedStateError: degraded: slow | WrappedStateError: unavailable: down"
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFormat {
    /// Text inserted between nodes by [`crate::FailureChain::report_with`].
    pub chain_separator: String,
    /// Text inserted between reasons by [`crate::StatusSummary::reduce_with`].
    pub reason_separator: String,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            chain_separator: DEFAULT_CHAIN_SEPARATOR.to_owned(),
            reason_separator: DEFAULT_REASON_SEPARATOR.to_owned(),
        }
    }
}

/// Failure to extract a [`ReportFormat`] from its providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportFormatError {
    /// A provider supplied a value of the wrong shape.
    #[error("failed to load report format: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ReportFormatError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

impl ReportFormat {
    /// Loads the format from defaults overlaid with `STATE_ERRORS_*`
    /// environment variables.
    ///
    /// Values are taken verbatim: surrounding whitespace is kept and digits
    /// stay text, so `STATE_ERRORS_REASON_SEPARATOR=", "` round-trips.
    ///
    /// # Errors
    ///
    /// Returns [`ReportFormatError::Extract`] when extraction fails.
    pub fn load() -> Result<Self, ReportFormatError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Serialized::defaults(raw_env_overrides()));
        Self::from_figment(&figment)
    }

    /// Extracts the format from a caller-assembled [`Figment`].
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReportFormatError::Extract`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ReportFormatError> {
        let format: Self = figment.extract()?;
        tracing::trace!(
            chain_separator = %format.chain_separator,
            reason_separator = %format.reason_separator,
            "loaded report format"
        );
        Ok(format)
    }
}

/// Collects `STATE_ERRORS_*` variables as unparsed strings keyed by their
/// lowercased, prefix-stripped names.
fn raw_env_overrides() -> BTreeMap<String, String> {
    Env::prefixed(ENV_PREFIX)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect()
}

#[cfg(test)]
mod tests;
