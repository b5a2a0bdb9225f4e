use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tsa workspace.
///
/// Every variant is fatal to the invocation that produced it. Nothing in the
/// workspace retries or downgrades these into sentinel values.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TsaError {
    /// A user-supplied token (duration, step, sort option) could not be parsed.
    #[error("could not parse {input:?}: {reason}")]
    Parse {
        /// The raw input as supplied by the caller.
        input: String,
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// Invalid input argument that parsed but cannot be honored.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The series provider failed to return data.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The provider call exceeded the configured timeout.
    #[error("provider timed out: {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
    },

    /// Statistics were requested over a zero-length sample sequence.
    #[error("empty series: {}", label.as_deref().unwrap_or("<anonymous>"))]
    EmptySeries {
        /// Label of the offending series; `None` for anonymous or aggregate input.
        label: Option<String>,
    },

    /// A sample was NaN or infinite.
    #[error("non-finite sample in series: {}", label.as_deref().unwrap_or("<anonymous>"))]
    NonFiniteSample {
        /// Label of the offending series; `None` for anonymous or aggregate input.
        label: Option<String>,
    },
}

impl TsaError {
    /// Helper: build a `Parse` error for an input and reason.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
        }
    }

    /// Helper: build an `EmptySeries` error for an optional label.
    pub fn empty_series(label: Option<&str>) -> Self {
        Self::EmptySeries {
            label: label.map(str::to_string),
        }
    }

    /// Helper: build a `NonFiniteSample` error for an optional label.
    pub fn non_finite(label: Option<&str>) -> Self {
        Self::NonFiniteSample {
            label: label.map(str::to_string),
        }
    }

    /// Returns true if the error originated from the provider side of the fetch.
    #[must_use]
    pub const fn is_provider_error(&self) -> bool {
        matches!(self, Self::Provider { .. } | Self::ProviderTimeout { .. })
    }
}
