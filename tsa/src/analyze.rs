use serde::{Deserialize, Serialize};
use tsa_core::{AnalysisOptions, DisplayResult, TimeWindow, TsaError};

use crate::Tsa;

/// Outcome of one analysis: the window that was requested and the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Window handed to the provider.
    pub window: TimeWindow,
    /// Display-ready statistics.
    pub result: DisplayResult,
}

/// Current wall-clock time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl Tsa {
    /// Resolve the options' time tokens against `now` using the configured
    /// window constants.
    ///
    /// # Errors
    /// `Parse` for malformed since/until/step, `InvalidArg` for a
    /// non-positive lookback.
    pub fn window(&self, opts: &AnalysisOptions, now: i64) -> Result<TimeWindow, TsaError> {
        tsa_core::resolve_with(
            &self.cfg.window,
            opts.since.as_deref(),
            opts.until.as_deref(),
            opts.step.as_deref(),
            now,
        )
    }

    /// Run one analysis anchored at the current system time.
    ///
    /// # Errors
    /// See [`Tsa::analyze_at`].
    pub async fn analyze(&self, opts: &AnalysisOptions) -> Result<Analysis, TsaError> {
        self.analyze_at(opts, now_ms()).await
    }

    /// Run one analysis anchored at `now` (epoch milliseconds).
    ///
    /// Steps, in order and without retries:
    /// 1. resolve the window (fails before any fetch on bad tokens),
    /// 2. fetch once from the provider, bounded by the configured timeout,
    /// 3. compute statistics and order/round them for display.
    ///
    /// Unset sort options fall back to the configured defaults.
    ///
    /// # Errors
    /// - `Parse`/`InvalidArg` from window resolution.
    /// - `Provider`/`ProviderTimeout` from the fetch; other error kinds returned
    ///   by the provider are wrapped as `Provider` with its name.
    /// - `EmptySeries`/`NonFiniteSample`/`InvalidArg` from processing.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tsa::analyze",
            skip(self, opts),
            fields(provider = self.provider.name(), aggregate = opts.aggregate),
            err,
        )
    )]
    pub async fn analyze_at(&self, opts: &AnalysisOptions, now: i64) -> Result<Analysis, TsaError> {
        let window = self.window(opts, now)?;

        let provider = &self.provider;
        let raw = Self::provider_call_with_timeout(
            provider.name(),
            self.cfg.provider_timeout,
            provider.fetch(window, opts),
        )
        .await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            series = raw.series_count(),
            samples = raw.sample_count(),
            "fetched raw series"
        );

        let sort_by = opts.sort_by.unwrap_or(self.cfg.default_sort_by);
        let direction = opts
            .sort_direction
            .unwrap_or(self.cfg.default_sort_direction);
        let result = tsa_core::process(&raw, opts.aggregate, sort_by, direction)?;

        Ok(Analysis { window, result })
    }
}
