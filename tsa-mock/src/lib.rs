use async_trait::async_trait;
use tsa_core::{AnalysisOptions, RawSeriesSet, SeriesProvider, TimeWindow, TsaError};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockProvider, MockBehavior};

/// Option key selecting which fixture the static mock returns.
pub const FIXTURE_KEY: &str = "fixture";

/// Mock provider for CI-safe examples. Serves deterministic data from static fixtures.
///
/// The fixture is chosen by the `"fixture"` entry of `options.extra` and
/// defaults to `"hosts"`. Two names are reserved: `"FAIL"` returns a provider
/// error and `"TIMEOUT"` sleeps briefly before answering.
pub struct MockProvider;

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn fixture_name(options: &AnalysisOptions) -> &str {
        options
            .extra
            .get(FIXTURE_KEY)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("hosts")
    }
}

#[async_trait]
impl SeriesProvider for MockProvider {
    fn name(&self) -> &'static str {
        "tsa-mock"
    }

    async fn fetch(
        &self,
        _window: TimeWindow,
        options: &AnalysisOptions,
    ) -> Result<RawSeriesSet, TsaError> {
        match Self::fixture_name(options) {
            "FAIL" => Err(TsaError::provider(self.name(), "forced failure: fetch")),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                fixtures::by_name("hosts")
                    .ok_or_else(|| TsaError::provider(self.name(), "fixture hosts missing"))
            }
            name => fixtures::by_name(name)
                .ok_or_else(|| TsaError::provider(self.name(), format!("unknown fixture {name}"))),
        }
    }
}
