use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{BookingController, HttpBookingGateway};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;
mod shell;
#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

use commands::Command;
use config::load_settings;

#[derive(Parser, Debug)]
#[command(about = "Create, list, edit and delete date-range bookings")]
struct Cli {
    /// Base URL of the booking service, e.g. http://127.0.0.1:8080/api
    #[arg(long)]
    server_url: Option<String>,
    /// TOML config file; defaults to ./booking.toml when present
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let gateway = HttpBookingGateway::new(settings.gateway_options()?)
        .context("failed to build booking service client")?;
    info!(base_url = %gateway.base_url(), "using booking service");
    let controller = BookingController::new(Arc::new(gateway));

    commands::execute(&controller, cli.command.unwrap_or(Command::Shell)).await
}
