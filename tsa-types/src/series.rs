//! Raw provider output and the display-ready result shapes.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Sample data as returned by a provider.
///
/// On the wire this is either a bare array of numbers or an object of the
/// form `{"data": {"label": [numbers], ...}}`. Label order is the provider's
/// insertion order and is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSeriesSet {
    /// A single unlabeled sequence of samples.
    Anonymous(Vec<f64>),
    /// Labeled sequences keyed by unique label.
    Labeled {
        /// Samples per label in provider order.
        data: IndexMap<String, Vec<f64>>,
    },
}

impl RawSeriesSet {
    /// Build a labeled set from `(label, samples)` pairs, keeping their order.
    ///
    /// A repeated label replaces the earlier samples but keeps the first position.
    pub fn labeled<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Vec<f64>)>,
    {
        Self::Labeled {
            data: pairs.into_iter().map(|(l, v)| (l.into(), v)).collect(),
        }
    }

    /// Number of series contained (an anonymous set counts as one).
    #[must_use]
    pub fn series_count(&self) -> usize {
        match self {
            Self::Anonymous(_) => 1,
            Self::Labeled { data } => data.len(),
        }
    }

    /// Total number of samples across every series.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        match self {
            Self::Anonymous(v) => v.len(),
            Self::Labeled { data } => data.values().map(Vec::len).sum(),
        }
    }
}

/// Minimum, maximum and arithmetic mean of a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Sum divided by count.
    pub mean: f64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min: {} Max: {} Mean: {}", self.min, self.max, self.mean)
    }
}

/// A statistic rounded to two decimal places, always rendered with two places.
///
/// Serialized as a string such as `"61.19"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue {
    /// Value within `Decimal` range, rounded exactly.
    Exact(Decimal),
    /// Finite value too large for a two-place `Decimal` (about 7.9e26 and
    /// up). Such `f64`s are whole numbers, so no rounding is involved.
    Wide(f64),
}

// Wide never holds NaN.
impl Eq for DisplayValue {}

impl From<Decimal> for DisplayValue {
    fn from(d: Decimal) -> Self {
        Self::Exact(d)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(d) => fmt::Display::fmt(d, f),
            Self::Wide(x) => write!(f, "{x:.2}"),
        }
    }
}

impl Serialize for DisplayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DisplayValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // a Decimal that had to drop digits would no longer print as written
        if let Ok(d) = Decimal::from_str(&raw) {
            if d.to_string() == raw {
                return Ok(Self::Exact(d));
            }
        }
        match raw.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Self::Wide(x)),
            _ => Err(de::Error::custom(format!("invalid display value {raw:?}"))),
        }
    }
}

/// Presentation copy of [`Stats`] rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStats {
    /// Rounded minimum.
    pub min: DisplayValue,
    /// Rounded maximum.
    pub max: DisplayValue,
    /// Rounded mean.
    pub mean: DisplayValue,
}

/// Per-series display rows keyed by label; iteration order is the sort order.
pub type DisplayTable = IndexMap<String, DisplayStats>;

/// Output of one analysis, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DisplayResult {
    /// A single statistics triple (anonymous or aggregate input).
    Summary(Stats),
    /// Sorted per-series rows.
    Table(DisplayTable),
}

impl DisplayResult {
    /// Return the summary triple, if this is a summary result.
    #[must_use]
    pub const fn as_summary(&self) -> Option<&Stats> {
        match self {
            Self::Summary(s) => Some(s),
            Self::Table(_) => None,
        }
    }

    /// Return the table rows, if this is a per-series result.
    #[must_use]
    pub const fn as_table(&self) -> Option<&DisplayTable> {
        match self {
            Self::Summary(_) => None,
            Self::Table(t) => Some(t),
        }
    }
}
