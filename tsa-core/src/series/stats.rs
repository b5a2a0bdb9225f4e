use crate::{Stats, TsaError};

/// Running min/max/mean over one or more sample slices.
///
/// Feeding several slices in sequence is equivalent to summarizing their
/// concatenation, which is how aggregate mode merges labeled series without
/// copying them.
#[derive(Debug, Clone, Copy)]
pub struct StatsAccumulator {
    count: usize,
    mean: f64,
    min: f64,
    max: f64,
    saw_non_finite: bool,
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAccumulator {
    /// Empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            saw_non_finite: false,
        }
    }

    /// Fold one sample into the running totals.
    ///
    /// The mean is updated incrementally, so finite samples near `f64::MAX`
    /// never overflow it.
    #[allow(clippy::cast_precision_loss)]
    pub fn push(&mut self, x: f64) {
        if !x.is_finite() {
            self.saw_non_finite = true;
            return;
        }
        self.count += 1;
        let n = self.count as f64;
        self.mean += x / n - self.mean / n;
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Fold every sample of `samples` in order.
    pub fn extend_from_slice(&mut self, samples: &[f64]) {
        for &x in samples {
            self.push(x);
        }
    }

    /// Number of finite samples seen so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Produce the final triple.
    ///
    /// # Errors
    /// - `TsaError::NonFiniteSample` if any NaN or infinite sample was pushed.
    /// - `TsaError::EmptySeries` if no samples were pushed.
    pub fn finish(&self, label: Option<&str>) -> Result<Stats, TsaError> {
        if self.saw_non_finite {
            return Err(TsaError::non_finite(label));
        }
        if self.count == 0 {
            return Err(TsaError::empty_series(label));
        }
        Ok(Stats {
            min: self.min,
            max: self.max,
            mean: self.mean,
        })
    }
}

/// Compute min, max and arithmetic mean of a sample sequence.
///
/// ```
/// use tsa_core::summarize;
///
/// let s = summarize(&[10.0, 20.0, 30.0], None).unwrap();
/// assert_eq!((s.min, s.max, s.mean), (10.0, 30.0, 20.0));
/// assert!(summarize(&[], Some("cpu")).is_err());
/// ```
///
/// # Errors
/// See [`StatsAccumulator::finish`]; `label` is attached to the error.
pub fn summarize(samples: &[f64], label: Option<&str>) -> Result<Stats, TsaError> {
    let mut acc = StatsAccumulator::new();
    acc.extend_from_slice(samples);
    acc.finish(label)
}
