use crate::api::printerstats::DEFAULT_URL;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

/// Caching JSON view of the cluster printer status page
#[derive(Parser, Debug, Clone)]
#[command(name = "printer_stats", version, about)]
pub struct Config {
    /// Upstream status page
    #[arg(long, env = "PRINTER_STATS_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// How long a fetched page is served from cache, in milliseconds
    #[arg(long, env = "PRINTER_STATS_TTL_MS", default_value_t = 10_000)]
    pub ttl_ms: u64,

    /// Address the HTTP service listens on
    #[arg(long, env = "PRINTER_STATS_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve /printers and /ping over HTTP (default)
    Serve,
    /// Fetch the page once and print a table
    Check,
}

impl Config {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
