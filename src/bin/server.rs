//! HTTP server binary for quizrank.

use clap::{Parser, Subcommand};
use quizrank::{QueryServer, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// quizrank: find study-set cards for a query and rank them by relevance.
#[derive(Parser)]
#[command(name = "quizrank-server", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Serve `GET /scrape` until interrupted.
    Serve,

    /// Write the effective configuration to the config path and exit.
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=quiz_search=trace to see queries.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quizrank=info,quiz_search=info")),
        )
        .init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Serve);
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(ServerConfig::default_config_path);
    // An explicit --config must exist when serving; init-config may create it.
    let mut config = match command {
        Command::Serve if cli.config.is_some() => {
            info!("loading config from {}", config_path.display());
            ServerConfig::from_file(&config_path)?
        }
        _ => ServerConfig::load_or_default(&config_path)?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    match command {
        Command::Serve => serve(config).await,
        Command::InitConfig => {
            config.save_to_file(&config_path)?;
            println!("wrote {}", config_path.display());
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!(
        site = %config.search.target_site,
        discovery = %config.search.discovery,
        "starting quizrank v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pipeline = Arc::new(quiz_search::web_pipeline(config.search)?);
    let server = QueryServer::start(pipeline, &config.server).await?;
    println!("Scraper server running at http://{}", server.addr());

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    server.shutdown();
    Ok(())
}
