use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gazzetta workspace.
///
/// Adapter failures are tagged with the adapter name so the aggregator can
/// report which source misbehaved. None of these ever reach the public
/// `company_news` entry point, which degrades to an empty list instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GazzettaError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An adapter failed while talking to its provider (transport, DNS, TLS...).
    #[error("{adapter} failed: {msg}")]
    Provider {
        /// Adapter name that failed.
        adapter: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{adapter} returned HTTP {status}")]
    Status {
        /// Adapter name that received the response.
        adapter: String,
        /// HTTP status code.
        status: u16,
    },

    /// The provider payload could not be decoded.
    #[error("{adapter} sent an unreadable payload: {msg}")]
    Parse {
        /// Adapter name whose payload was rejected.
        adapter: String,
        /// Decoder message.
        msg: String,
    },

    /// An individual adapter call exceeded the configured timeout.
    #[error("adapter timed out: {adapter}")]
    ProviderTimeout {
        /// Adapter name that timed out.
        adapter: String,
    },

    /// The task running an adapter call panicked.
    #[error("adapter panicked: {adapter}")]
    ProviderPanicked {
        /// Adapter name whose task panicked.
        adapter: String,
    },

    /// Every registered adapter failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<GazzettaError>),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GazzettaError {
    /// Helper: build a `Provider` error with the adapter name and message.
    pub fn provider(adapter: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            adapter: adapter.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error.
    pub fn status(adapter: impl Into<String>, status: u16) -> Self {
        Self::Status {
            adapter: adapter.into(),
            status,
        }
    }

    /// Helper: build a `Parse` error.
    pub fn parse(adapter: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            adapter: adapter.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(adapter: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            adapter: adapter.into(),
        }
    }

    /// Helper: build a `ProviderPanicked` error.
    pub fn provider_panicked(adapter: impl Into<String>) -> Self {
        Self::ProviderPanicked {
            adapter: adapter.into(),
        }
    }

    /// Name of the adapter this error is tagged with, if any.
    #[must_use]
    pub fn adapter(&self) -> Option<&str> {
        match self {
            Self::Provider { adapter, .. }
            | Self::Status { adapter, .. }
            | Self::Parse { adapter, .. }
            | Self::ProviderTimeout { adapter }
            | Self::ProviderPanicked { adapter } => Some(adapter),
            _ => None,
        }
    }

    /// Returns true if a later retry of the same request might succeed.
    ///
    /// Timeouts, transport failures and 5xx/429 statuses are transient; parse
    /// failures and client errors are not. Aggregates are transient when any
    /// member is.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Provider { .. } | Self::ProviderTimeout { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_transient),
            _ => false,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
