//! tsa-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod options;
mod series;
mod window;

pub use config::{TsaConfig, WindowConfig};
pub use error::TsaError;
pub use options::{AnalysisOptions, SortBy, SortDirection};
pub use series::{DisplayResult, DisplayStats, DisplayTable, DisplayValue, RawSeriesSet, Stats};
pub use window::TimeWindow;
