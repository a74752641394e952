//! Skills-for-charity marketplace web server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ request id ─▶ trace ─▶ security headers ─▶ limits/timeout
//!                                                                   │
//!                                                                   ▼
//!                                                        ┌────────────────────┐
//!                                                        │   locale router    │
//!                                                        │ excluded? prefixed?│
//!                                                        └───┬────────────┬───┘
//!                                               pass-through │            │ 307 /<default>/...
//!                                                            ▼            ▼
//!                                              pages / api / 404     Client Response
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use donation_market::lifecycle::{signals, startup};
use donation_market::observability::{logging, metrics};
use donation_market::{AppServer, Shutdown};

#[derive(Parser)]
#[command(name = "donation-market")]
#[command(about = "Localized web server for the skills-for-charity marketplace", long_about = None)]
struct Cli {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Validate the configuration, print a summary and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    if cli.check {
        println!("configuration OK");
        println!("  bind_address: {}", config.listener.bind_address);
        println!("  locales:      {}", config.locales.supported.join(", "));
        println!("  default:      {}", config.locales.default);
        return Ok(());
    }

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "donation-market starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = AppServer::new(config)?;
    server.run(listener, shutdown.signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
