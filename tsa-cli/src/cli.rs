use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tsa::{AnalysisOptions, SortBy, SortDirection, TsaConfig, TsaError};

/// Analyze a JSON series set over a relative time window.
///
/// Input is either a bare array of numbers or `{"data": {"label": [..], ..}}`.
#[derive(Parser, Debug, Clone)]
#[command(name = "tsa", author, version, about, long_about = None)]
pub struct Cli {
    /// Lookback from `until`, e.g. `6h` or `1d 12h` [default: 1h]
    #[arg(long, allow_hyphen_values = true)]
    pub since: Option<String>,

    /// End of the window as a relative duration ago, or `now` [default: now]
    #[arg(long, allow_hyphen_values = true)]
    pub until: Option<String>,

    /// Sampling step; fractions are truncated and 0 picks roughly 1000 points
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<String>,

    /// Merge all labeled series into a single summary
    #[arg(long, default_value_t = false)]
    pub aggregate: bool,

    /// Statistic used for ranking: min, max or mean
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Ranking direction: asc or desc
    #[arg(long)]
    pub sort_direction: Option<String>,

    /// JSON series file, `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Abort the fetch after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// JSON configuration file (window constants, defaults, timeout)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the window and result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Translate flags into analysis options. Sort values go through the same
    /// parser as every other caller, so bad values surface as parse errors.
    pub fn options(&self) -> Result<AnalysisOptions, TsaError> {
        let mut opts = AnalysisOptions::new().aggregate(self.aggregate);
        opts.since.clone_from(&self.since);
        opts.until.clone_from(&self.until);
        opts.step.clone_from(&self.step);
        if let Some(by) = &self.sort_by {
            opts = opts.sort_by(by.parse::<SortBy>()?);
        }
        if let Some(dir) = &self.sort_direction {
            opts = opts.sort_direction(dir.parse::<SortDirection>()?);
        }
        Ok(opts)
    }

    /// Configuration from `--config` (or defaults) with `--timeout-ms` applied on top.
    pub fn config(&self) -> anyhow::Result<TsaConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => TsaConfig::default(),
        };
        if let Some(ms) = self.timeout_ms {
            cfg.provider_timeout = Some(Duration::from_millis(ms));
        }
        Ok(cfg)
    }
}
