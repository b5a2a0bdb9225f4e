use std::sync::Arc;
use std::time::Duration;

use tsa_core::{SeriesProvider, SortBy, SortDirection, TsaConfig, TsaError, WindowConfig};

/// Orchestrator that resolves a window, fetches from its provider once, and
/// summarizes the result.
pub struct Tsa {
    pub(crate) provider: Arc<dyn SeriesProvider>,
    pub(crate) cfg: TsaConfig,
}

/// Builder for constructing a `Tsa` orchestrator with custom configuration.
pub struct TsaBuilder {
    provider: Option<Arc<dyn SeriesProvider>>,
    cfg: TsaConfig,
}

impl Default for TsaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TsaBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: one-hour lookback, ~1000 point grid with a step floor of 30,
    /// no fetch timeout, per-series output ordered by mean descending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            cfg: TsaConfig::default(),
        }
    }

    /// Register the series provider. Registering again replaces the previous one.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn SeriesProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: TsaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the window resolution constants.
    #[must_use]
    pub const fn window_config(mut self, window: WindowConfig) -> Self {
        self.cfg.window = window;
        self
    }

    /// Bound the provider fetch.
    ///
    /// When the deadline passes the fetch future is dropped and the analysis
    /// fails with `ProviderTimeout`. Without a timeout the provider is
    /// responsible for its own cancellation.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = Some(timeout);
        self
    }

    /// Statistic used when an invocation leaves `sort_by` unset.
    #[must_use]
    pub const fn default_sort_by(mut self, by: SortBy) -> Self {
        self.cfg.default_sort_by = by;
        self
    }

    /// Direction used when an invocation leaves `sort_direction` unset.
    #[must_use]
    pub const fn default_sort_direction(mut self, dir: SortDirection) -> Self {
        self.cfg.default_sort_direction = dir;
        self
    }

    /// Build the `Tsa` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider was registered, if the window
    /// configuration has a non-positive lookback or target point count, or if
    /// its minimum step is below `WindowConfig::MIN_STEP`.
    pub fn build(self) -> Result<Tsa, TsaError> {
        let Some(provider) = self.provider else {
            return Err(TsaError::InvalidArg(
                "no provider registered; add one via with_provider(...)".to_string(),
            ));
        };
        if self.cfg.window.default_lookback_ms <= 0 {
            return Err(TsaError::InvalidArg(
                "default lookback must be positive".to_string(),
            ));
        }
        if self.cfg.window.target_points <= 0 {
            return Err(TsaError::InvalidArg(
                "target point count must be positive".to_string(),
            ));
        }
        if self.cfg.window.min_step < WindowConfig::MIN_STEP {
            return Err(TsaError::InvalidArg(format!(
                "minimum step must be at least {}, got {}",
                WindowConfig::MIN_STEP,
                self.cfg.window.min_step
            )));
        }
        Ok(Tsa {
            provider,
            cfg: self.cfg,
        })
    }
}

/// Attach the provider name to errors that do not already carry provider context.
pub(crate) fn tag_err(provider: &str, e: TsaError) -> TsaError {
    match e {
        e @ (TsaError::Provider { .. } | TsaError::ProviderTimeout { .. }) => e,
        other => TsaError::Provider {
            provider: provider.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Tsa {
    /// Start building a new `Tsa` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let tsa = tsa::Tsa::builder()
    ///     .with_provider(Arc::new(MyProvider::new()))
    ///     .provider_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> TsaBuilder {
        TsaBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &TsaConfig {
        &self.cfg
    }

    /// Name of the registered provider.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Wrap a provider future with an optional timeout and standardized error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tsa::core::provider_call_with_timeout",
            skip(fut),
            fields(
                provider = provider_name,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        provider_name: &'static str,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, TsaError>
    where
        Fut: core::future::Future<Output = Result<T, TsaError>>,
    {
        let res = match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await)
                .unwrap_or_else(|_| Err(TsaError::provider_timeout(provider_name))),
            None => fut.await,
        };
        res.map_err(|e| tag_err(provider_name, e))
    }
}
