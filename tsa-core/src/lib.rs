//! tsa-core
//!
//! Core types, traits, and algorithms shared across the tsa workspace.
//!
//! - `types`: re-exports of the shared data transfer objects and error type.
//! - `provider`: the `SeriesProvider` trait implemented by data sources.
//! - `window`: duration parsing and resolution of since/until/step tokens into
//!   a concrete `TimeWindow`.
//! - `series`: min/max/mean reductions, aggregation, sorting, and display
//!   rounding of provider output.
//!
//! Nothing in this crate performs I/O. The provider fetch is the only async
//! boundary and lives behind the trait; everything else is synchronous and
//! deterministic.
#![warn(missing_docs)]

/// The provider trait implemented by time-series data sources.
pub mod provider;
/// Statistics, aggregation, ordering and display conversion for series data.
pub mod series;
pub mod types;
/// Duration parsing and time window resolution.
pub mod window;

pub use provider::SeriesProvider;
pub use series::display::{display_stats, round_for_display};
pub use series::process::{SeriesStats, process, series_stats, sort_series};
pub use series::stats::{StatsAccumulator, summarize};
pub use types::*;
pub use window::duration::parse_duration_ms;
pub use window::resolve::{resolve, resolve_with};
