//! `tsa` command: analyze a recorded series set over a relative time window.
//!
//! Logs go to stderr and are filtered through `RUST_LOG` (default `warn`).
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod cli;
mod provider;
mod render;

use cli::Cli;
use provider::{JsonFileProvider, Source};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let opts = cli.options()?;
    let provider = JsonFileProvider::new(Source::from_arg(&cli.input));
    let tsa = tsa::Tsa::builder()
        .with_provider(Arc::new(provider))
        .config(cli.config()?)
        .build()?;

    tracing::info!(provider = tsa.provider_name(), input = %cli.input, "starting analysis");
    let analysis = tsa.analyze(&opts).await?;

    if cli.json {
        println!("{}", render::json(&analysis).context("encoding result")?);
    } else {
        println!("{}", render::text(&analysis.result));
    }
    Ok(())
}
