//! Re-export of foundational types from `tsa-types`.
// Consolidated re-exports so downstream crates can depend on `tsa-core` only

pub use tsa_types::{
    AnalysisOptions, DisplayResult, DisplayStats, DisplayTable, DisplayValue, RawSeriesSet, SortBy,
    SortDirection, Stats, TimeWindow, TsaConfig, TsaError, WindowConfig,
};
