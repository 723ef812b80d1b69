use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use southbridge::{AppState, build_router, config};

#[derive(Debug, Parser)]
#[command(name = "southbridge", about = "Southbound overlay-VPN driver for branch controllers")]
struct Cli {
    /// Path to the service config file.
    #[arg(short, long, env = "SOUTHBRIDGE_CONFIG", default_value = "southbridge.toml")]
    config: PathBuf,

    /// Listen address override.
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Increase log verbosity (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("southbridge: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = config::load(&cli.config)?;
    let listen = cli.listen.unwrap_or(config.listen);

    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(%listen, controllers = config.controllers.len(), "southbridge listening");
    axum::serve(listener, app).await?;

    Ok(())
}
