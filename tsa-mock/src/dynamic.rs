use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tsa_core::{AnalysisOptions, RawSeriesSet, SeriesProvider, TimeWindow, TsaError};

/// Instruction for how a fetch should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(TsaError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    behavior: Option<MockBehavior<RawSeriesSet>>,
    requests: Vec<(TimeWindow, AnalysisOptions)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `fetch` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<RawSeriesSet>) {
        let mut guard = self.state.lock().await;
        guard.behavior = Some(behavior);
    }

    /// Windows requested so far, in call order.
    pub async fn requested_windows(&self) -> Vec<TimeWindow> {
        let guard = self.state.lock().await;
        guard.requests.iter().map(|(w, _)| *w).collect()
    }

    /// Full request log (window and options), in call order.
    pub async fn requests(&self) -> Vec<(TimeWindow, AnalysisOptions)> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear the configured behavior and the request log.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        guard.behavior = None;
        guard.requests.clear();
    }
}

/// A provider that defers all behavior to an external controller.
pub struct DynamicMockProvider {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SeriesProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesProvider>, controller)
    }
}

#[async_trait]
impl SeriesProvider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        window: TimeWindow,
        options: &AnalysisOptions,
    ) -> Result<RawSeriesSet, TsaError> {
        // Record and snapshot without holding the lock across the await below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((window, options.clone()));
            guard.behavior.clone()
        };
        match behavior {
            Some(MockBehavior::Return(raw)) => Ok(raw),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(TsaError::provider(self.name, "no behavior configured")),
        }
    }
}
