use clap::Parser;
use printer_stats::api::PrinterStatsApi;
use printer_stats::config::Command;
use printer_stats::models::TtlCache;
use printer_stats::server::start_server;
use printer_stats::utils::display::DisplayFormatter;
use printer_stats::{Config, PrinterService};
use reqwest::Client;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    debug!("Loaded configuration: {:?}", config);

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let cache = TtlCache::new(config.ttl());
    let ttl = cache.ttl();

    let service = PrinterService::new(
        config.url.clone(),
        cache,
        Arc::new(PrinterStatsApi::with_client(client)),
    );

    match config.command() {
        Command::Serve => {
            info!(
                "Starting printer stats service for {} (ttl {}ms)",
                service.url(),
                ttl.as_millis()
            );
            start_server(service, config.bind).await?;
        }
        Command::Check => {
            let report = service.handle_request().await?;
            println!("{}", DisplayFormatter::new().format_report(&report));
        }
    }

    info!("Shutting down");
    Ok(())
}
