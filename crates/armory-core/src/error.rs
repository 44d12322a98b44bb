//! Error types and handling for armory-core operations.
//!
//! This module provides a comprehensive error type that covers all possible failures
//! in the armory scraping pipeline. Errors are categorized so callers can tell
//! apart contract violations (bad arguments, unknown statistic names) from
//! environmental failures (network, cache storage).
//!
//! ## Error Categories
//!
//! - **Argument Errors**: empty server/character/guild names or cache keys,
//!   rejected before any network or cache access
//! - **Network Errors**: HTTP transport failures; never retried at this layer
//!   (retries only apply to empty-but-successful responses, see `fetcher`)
//! - **Extraction Errors**: an element the contract requires is missing from
//!   otherwise well-formed markup (e.g. the roster total-count field)
//! - **Storage Errors**: cache directory and file failures
//!
//! Sentinel text and absent optional fields are *not* errors: they are valid
//! domain states that the extractors normalize to empty values.

use thiserror::Error;

/// The main error type for armory-core operations.
///
/// All public functions in armory-core return `Result<T, Error>` for consistent
/// error handling. Malformed markup never produces an error by itself: the
/// document layer parses best-effort and unresolvable structure degrades to
/// absent fields downstream.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty.
    ///
    /// Raised at the public-contract boundary before any cache or network
    /// access is attempted. Carries the name of the offending field so the
    /// caller knows which input to fix.
    #[error("invalid argument: '{field}' must not be empty")]
    InvalidArgument {
        /// Name of the offending argument (e.g. `server`, `character`).
        field: &'static str,
    },

    /// Network operation failed.
    ///
    /// Covers HTTP transport failures while fetching armory pages. The
    /// underlying `reqwest::Error` is preserved for detailed connection
    /// information. Transport failures are not retried; the retry budget in
    /// the fetcher exists only for empty-but-successful responses.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An expected structural element is absent.
    ///
    /// Raised when the contract requires a field that cannot be located in the
    /// fetched markup, such as the guild-roster total-count or the display
    /// name on a gem page. Optional per-field absence does not raise; it is
    /// normalized to empty values instead.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// A statistic name lookup found no match.
    ///
    /// Statistic pages expose a name/value list without stable keys; asking
    /// for a name that is not present is a caller contract violation rather
    /// than a missing-data condition, so it raises instead of returning empty.
    #[error("statistic not found: '{0}'")]
    StatisticNotFound(String),

    /// A URL could not be built or parsed.
    ///
    /// Raised for malformed base-URL configuration or gem references that do
    /// not resolve to a usable URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Cache storage operation failed.
    ///
    /// Covers cache directory creation, cache file reads/writes, and
    /// modification-timestamp inspection.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed (config files, JSON output).
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Returns a short, stable category name for the error.
    ///
    /// Useful for logging and metrics without matching on every variant.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Network(_) => "network",
            Self::Extraction(_) => "extraction",
            Self::StatisticNotFound(_) => "statistic_not_found",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Storage(_) => "storage",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Check whether the error is a caller contract violation.
    ///
    /// Contract violations (`InvalidArgument`, `StatisticNotFound`) indicate
    /// the caller passed bad input; everything else is environmental.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::StatisticNotFound(_)
        )
    }
}

/// Convenient result type alias used throughout armory-core.
pub type Result<T> = std::result::Result<T, Error>;
