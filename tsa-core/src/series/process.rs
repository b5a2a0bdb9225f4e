use indexmap::IndexMap;

use crate::series::display::display_stats;
use crate::series::stats::{StatsAccumulator, summarize};
use crate::{DisplayResult, DisplayTable, RawSeriesSet, SortBy, SortDirection, Stats, TsaError};

/// Statistics for one labeled series, borrowing the label and source samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats<'a> {
    /// Series label as supplied by the provider.
    pub label: &'a str,
    /// Unrounded statistics.
    pub stats: Stats,
    /// The samples the statistics were computed from.
    pub samples: &'a [f64],
}

impl SeriesStats<'_> {
    /// The statistic selected by `by`.
    #[must_use]
    pub const fn key(&self, by: SortBy) -> f64 {
        match by {
            SortBy::Min => self.stats.min,
            SortBy::Max => self.stats.max,
            SortBy::Mean => self.stats.mean,
        }
    }
}

/// Compute statistics for every labeled series, in label order.
///
/// # Errors
/// Fails on the first empty or non-finite series, naming its label.
pub fn series_stats(data: &IndexMap<String, Vec<f64>>) -> Result<Vec<SeriesStats<'_>>, TsaError> {
    data.iter()
        .map(|(label, samples)| {
            Ok(SeriesStats {
                label,
                stats: summarize(samples, Some(label.as_str()))?,
                samples,
            })
        })
        .collect()
}

/// Stable sort of per-series statistics by one field.
///
/// Series with equal keys keep their relative (provider) order in either
/// direction.
pub fn sort_series(series: &mut [SeriesStats<'_>], by: SortBy, direction: SortDirection) {
    series.sort_by(|a, b| {
        let (low, high) = match direction {
            SortDirection::Asc => (a, b),
            SortDirection::Desc => (b, a),
        };
        low.key(by).total_cmp(&high.key(by))
    });
}

/// Turn raw provider output into a display-ready result.
///
/// - Anonymous input yields a single summary; `aggregate` and the sort
///   options are ignored.
/// - With `aggregate`, every labeled series is concatenated in label order and
///   summarized once; per-label results are not reported.
/// - Otherwise each label is summarized, the list is stably sorted by `sort_by`
///   in `direction`, and rounded rows are emitted in that order.
///
/// Rounding happens after sorting and only on the emitted copies.
///
/// # Errors
/// - `TsaError::EmptySeries` for an empty anonymous sequence, an aggregate
///   with no samples at all, or any empty labeled series in per-series mode.
/// - `TsaError::NonFiniteSample` if a NaN or infinite sample is encountered.
/// - `TsaError::InvalidArg` if a statistic cannot be represented for display.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tsa_core::series::process",
        skip(raw),
        fields(series = raw.series_count(), samples = raw.sample_count()),
        err,
    )
)]
pub fn process(
    raw: &RawSeriesSet,
    aggregate: bool,
    sort_by: SortBy,
    direction: SortDirection,
) -> Result<DisplayResult, TsaError> {
    match raw {
        RawSeriesSet::Anonymous(samples) => Ok(DisplayResult::Summary(summarize(samples, None)?)),
        RawSeriesSet::Labeled { data } if aggregate => {
            let mut acc = StatsAccumulator::new();
            for samples in data.values() {
                acc.extend_from_slice(samples);
            }
            Ok(DisplayResult::Summary(acc.finish(None)?))
        }
        RawSeriesSet::Labeled { data } => {
            let mut rows = series_stats(data)?;
            sort_series(&mut rows, sort_by, direction);
            let mut table = DisplayTable::with_capacity(rows.len());
            for row in &rows {
                table.insert(row.label.to_string(), display_stats(&row.stats)?);
            }
            Ok(DisplayResult::Table(table))
        }
    }
}
