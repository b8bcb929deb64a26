use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod config;
#[cfg(test)]
mod test_utils;

use crate::cli::Cli;
use crate::config::{Settings, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load()?;

    // Logs go to stderr; stdout carries command output only
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli.run(&settings).await
}
