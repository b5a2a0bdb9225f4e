//! Statistics pipeline applied to provider output.
//!
//! Modules include:
//! - `stats`: pure min/max/mean reductions with an explicit empty-series policy
//! - `process`: anonymous, aggregate and per-series processing with ordering
//! - `display`: two-decimal presentation rounding
/// Presentation rounding helpers.
pub mod display;
/// Per-series, aggregate and anonymous processing.
pub mod process;
/// Min/max/mean reductions.
pub mod stats;
