//! Configuration types shared by the resolver and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{SortBy, SortDirection};

/// Constants used when resolving a [`crate::TimeWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Lookback from `until` when `since` is omitted, in milliseconds.
    pub default_lookback_ms: i64,
    /// Number of intervals the window is divided into when `step` is omitted.
    pub target_points: i64,
    /// Floor applied to every resolved step.
    pub min_step: i64,
}

impl WindowConfig {
    /// One hour, in milliseconds.
    pub const DEFAULT_LOOKBACK_MS: i64 = 3_600_000;
    /// Roughly one thousand points per window.
    pub const DEFAULT_TARGET_POINTS: i64 = 1000;
    /// Smallest step ever handed to a provider.
    pub const MIN_STEP: i64 = 30;
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_lookback_ms: Self::DEFAULT_LOOKBACK_MS,
            target_points: Self::DEFAULT_TARGET_POINTS,
            min_step: Self::MIN_STEP,
        }
    }
}

/// Global configuration for the `Tsa` orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TsaConfig {
    /// Window resolution constants.
    pub window: WindowConfig,
    /// Optional deadline for the single provider fetch. `None` waits indefinitely
    /// and leaves cancellation to the provider.
    pub provider_timeout: Option<Duration>,
    /// Statistic used when the invocation does not choose one.
    pub default_sort_by: SortBy,
    /// Direction used when the invocation does not choose one.
    pub default_sort_direction: SortDirection,
}
