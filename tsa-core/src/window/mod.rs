//! Turning user-facing time tokens into a concrete `TimeWindow`.
//!
//! - `duration`: parse human duration strings ("2 hours", "1h30m") to milliseconds
//! - `resolve`: apply since/until/step semantics, defaults and the step floor

/// Human duration string parsing.
pub mod duration;
/// Since/until/step resolution.
pub mod resolve;
