// Main entry point - Dependency injection and CLI dispatch
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::burn_service::BurnService;
use crate::application::poller::DashboardPoller;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::patient_client::HttpPatientClient;
use crate::presentation::term::TermRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "burn-dashboard",
    about = "Terminal status dashboard for the patient burn process"
)]
struct Cli {
    /// Patient host, overriding the configured value
    #[arg(long)]
    host: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the metrics endpoint and keep the dashboard painted (default)
    Watch,
    /// Ask the patient to start burning
    Start,
    /// Ask the patient to stop burning
    Stop,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the painted dashboard
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_dashboard_config()?;
    if let Some(host) = cli.host {
        config.patient.host = host;
    }

    let client = Arc::new(HttpPatientClient::new(
        &config.patient.host,
        config.patient.timeout(),
    )?);
    let burn_service = BurnService::new(client.clone());

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(client, burn_service, config.poll.interval()).await,
        Command::Start => burn_service.start().await,
        Command::Stop => burn_service.stop().await,
    }
}

/// Run the poller until Ctrl+C, treating stdin lines as the dashboard's
/// control surface: `start`, `stop`, `quit`.
async fn watch(
    client: Arc<HttpPatientClient>,
    burn_service: BurnService,
    interval: Duration,
) -> Result<()> {
    let renderer = Arc::new(TermRenderer::new());
    let poller = DashboardPoller::new(client, renderer);

    let poll_loop = tokio::spawn(async move { poller.run(interval).await });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line?.as_deref().map(str::trim) {
                Some("start") => {
                    if let Err(e) = burn_service.start().await {
                        tracing::warn!("start failed: {e:#}");
                    }
                }
                Some("stop") => {
                    if let Err(e) = burn_service.stop().await {
                        tracing::warn!("stop failed: {e:#}");
                    }
                }
                Some("quit") | Some("q") | None => break,
                Some("") => {}
                Some(other) => tracing::info!("unknown command: {other}"),
            },
        }
    }

    poll_loop.abort();
    Ok(())
}
