//! ReturnFlow CLI - driver manifest and returns routing

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use returnflow::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = Config::from_env()?;

    std::fs::create_dir_all(&config.logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "returnflow.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries command output, so console logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,returnflow=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!("Starting ReturnFlow...");

    let command = cli.command.unwrap_or(cli::Command::Manifest { complete: vec![] });

    if let Err(e) = commands::run(command, &config).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
