//! Invocation options and the closed sort enums validated at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TsaError;

/// Statistic used to order per-series results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Order by the series minimum.
    Min,
    /// Order by the series maximum.
    Max,
    /// Order by the arithmetic mean.
    #[default]
    Mean,
}

impl SortBy {
    /// Lowercase option name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = TsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "mean" => Ok(Self::Mean),
            _ => Err(TsaError::parse(s, "expected one of [min|max|mean]")),
        }
    }
}

/// Direction in which per-series results are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest statistic first.
    Asc,
    /// Largest statistic first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Lowercase option name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(TsaError::parse(s, "expected one of [asc|desc]")),
        }
    }
}

/// Raw options for a single analysis invocation.
///
/// Time tokens stay as strings here; the window resolver owns their parsing.
/// Sort fields left as `None` fall back to the orchestrator's configured
/// defaults. `extra` is forwarded to the provider untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalysisOptions {
    /// Lookback from `until`, as a duration string (e.g. `"2 hours"`).
    pub since: Option<String>,
    /// `"now"` or a duration string meaning "that long ago".
    pub until: Option<String>,
    /// Integer step count; defaults to a ~1000 point grid.
    pub step: Option<String>,
    /// Merge all labeled series into one before computing statistics.
    pub aggregate: bool,
    /// Statistic to order per-series results by.
    pub sort_by: Option<SortBy>,
    /// Direction to order per-series results in.
    pub sort_direction: Option<SortDirection>,
    /// Provider-specific options the core does not interpret.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisOptions {
    /// Start from empty options (every token defaulted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `since` token.
    #[must_use]
    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Set the `until` token.
    #[must_use]
    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// Set the `step` token.
    #[must_use]
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    /// Toggle aggregate mode.
    #[must_use]
    pub const fn aggregate(mut self, yes: bool) -> Self {
        self.aggregate = yes;
        self
    }

    /// Set the sort statistic.
    #[must_use]
    pub const fn sort_by(mut self, by: SortBy) -> Self {
        self.sort_by = Some(by);
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn sort_direction(mut self, dir: SortDirection) -> Self {
        self.sort_direction = Some(dir);
        self
    }
}
