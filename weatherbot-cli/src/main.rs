//! Binary crate for the `weatherbot` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive conversation loop
//! - Interactive configuration

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod chat;
mod cli;
mod configure;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherbot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
