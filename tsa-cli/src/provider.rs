use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tsa::{AnalysisOptions, RawSeriesSet, SeriesProvider, TimeWindow, TsaError};

const NAME: &str = "json-file";

/// Where the JSON series set is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin; anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Provider serving a pre-recorded series set.
///
/// The samples are taken as already covering the requested window; the window
/// is only logged.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    source: Source,
}

impl JsonFileProvider {
    pub const fn new(source: Source) -> Self {
        Self { source }
    }

    async fn read(&self) -> Result<String, TsaError> {
        match &self.source {
            Source::Stdin => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .map_err(|e| TsaError::provider(NAME, format!("reading stdin: {e}")))?;
                Ok(buf)
            }
            Source::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                TsaError::provider(NAME, format!("reading {}: {e}", path.display()))
            }),
        }
    }
}

#[async_trait]
impl SeriesProvider for JsonFileProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn fetch(
        &self,
        window: TimeWindow,
        _options: &AnalysisOptions,
    ) -> Result<RawSeriesSet, TsaError> {
        tracing::debug!(?window, source = ?self.source, "loading series set");
        let text = self.read().await?;
        serde_json::from_str(&text)
            .map_err(|e| TsaError::provider(NAME, format!("invalid series JSON: {e}")))
    }
}
