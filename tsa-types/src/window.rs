//! Resolved analysis window.

use serde::{Deserialize, Serialize};

/// A concrete `{start, end, step}` grid requested from a provider.
///
/// `start` and `end` are Unix epoch milliseconds. `step` is the sampling
/// interval in the unit providers expect; it is derived from the window span
/// divided by the target point count, so it is unit-compatible with
/// `(end - start) / 1000`.
///
/// Windows produced by the resolver always satisfy `start < end` and
/// `step >= 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive window start (epoch milliseconds).
    pub start: i64,
    /// Window end (epoch milliseconds).
    pub end: i64,
    /// Sampling interval.
    pub step: i64,
}

impl TimeWindow {
    /// Length of the window in milliseconds.
    #[must_use]
    pub const fn span_ms(&self) -> i64 {
        self.end - self.start
    }
}
