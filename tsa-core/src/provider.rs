use async_trait::async_trait;

use crate::{AnalysisOptions, RawSeriesSet, TimeWindow, TsaError};

/// Source of raw time-series samples for a resolved window.
///
/// Implementations own transport, authentication, cancellation and any limits
/// on window size. The core calls `fetch` exactly once per analysis and never
/// retries.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Stable identifier used in error messages and logs, e.g. "prometheus".
    fn name(&self) -> &'static str;

    /// Fetch samples covering `window`.
    ///
    /// `options` is the full invocation option set; providers read whatever
    /// they need from it (typically `options.extra`) and ignore the rest.
    ///
    /// # Errors
    /// Implementations should return `TsaError::Provider` for transport or
    /// upstream failures. Other variants are tagged with the provider name by
    /// the orchestrator before being surfaced.
    async fn fetch(
        &self,
        window: TimeWindow,
        options: &AnalysisOptions,
    ) -> Result<RawSeriesSet, TsaError>;
}
