//! MCP HTTP bridge entry point
//!
//! Serves `POST /rpc` and `GET /health`, forwarding RPC calls to the
//! Archon REST API.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_http_bridge::core::config::{Config, LoggingConfig};
use mcp_http_bridge::core::xdg::XdgDirs;
use mcp_http_bridge::http;

/// JSON-RPC over HTTP bridge for agent tool calls
#[derive(Parser, Debug)]
#[command(name = "mcp-http-bridge", version, about)]
struct Args {
    /// Config file (overrides the XDG lookup)
    #[arg(long, env = "MCP_BRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Base URL of the Archon REST API
    #[arg(long)]
    backend_url: Option<String>,
}

fn init_tracing(logging: &LoggingConfig) {
    let level = &logging.level;
    let fallback = format!("mcp_http_bridge={level},tower_http={level}");
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()),
    );

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn load_config(args: &Args) -> mcp_http_bridge::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = &args.backend_url {
        config.backend.url = Some(url.clone());
    }
    config.validate()?;

    Ok(config)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    init_tracing(&config.logging);

    tracing::info!("Starting MCP HTTP Bridge");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    XdgDirs::new().log_paths();
    config.log_config();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = http::app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting MCP HTTP Bridge on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("MCP HTTP Bridge stopped");
    Ok(())
}
