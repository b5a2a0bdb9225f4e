//! tsa runs a single time-series analysis against a pluggable provider.
//!
//! Overview
//! - Resolves relative `since`/`until`/`step` tokens into a concrete
//!   `TimeWindow` (epoch milliseconds, step floored at 30).
//! - Fetches raw samples once from a `SeriesProvider`, optionally bounded by a
//!   timeout. Failures are fatal; there are no retries or partial results.
//! - Computes min/max/mean per series and either ranks the series by one
//!   statistic or merges them into a single aggregate summary.
//!
//! Key behaviors
//! - Time tokens are relative only: a non-"now" `until` means "that long ago"
//!   and `since` is a lookback from the resolved `until`. Absolute timestamps
//!   are rejected as parse errors.
//! - Empty series are errors, never silent zeros or NaN.
//! - Display values are rounded to two decimals after sorting, so rounding
//!   never changes the order.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use tsa::{AnalysisOptions, SortBy, SortDirection, Tsa};
//!
//! let tsa = Tsa::builder()
//!     .with_provider(Arc::new(MyProvider::new()))
//!     .build()?;
//!
//! let opts = AnalysisOptions::new()
//!     .since("6h")
//!     .sort_by(SortBy::Max)
//!     .sort_direction(SortDirection::Asc);
//! let analysis = tsa.analyze(&opts).await?;
//! println!("{:?}", analysis.result);
//! ```
#![warn(missing_docs)]

mod analyze;
pub(crate) mod core;

pub use analyze::{Analysis, now_ms};
pub use core::{Tsa, TsaBuilder};

pub use tsa_core::SeriesProvider;
pub use tsa_types::{
    AnalysisOptions, DisplayResult, DisplayStats, DisplayTable, DisplayValue, RawSeriesSet, SortBy,
    SortDirection, Stats, TimeWindow, TsaConfig, TsaError, WindowConfig,
};
