//! plx-ui - Product Placements Explorer web module
//!
//! Renders product recommendations for an e-commerce item by querying one or
//! more named recommendation models from the placement scoring service, one
//! concurrent call per model, and serving the results as a web page.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use plx_common::config::ConfigResolver;
use plx_ui::client::PlacementClient;
use plx_ui::orchestrator::FanOutOrchestrator;
use plx_ui::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "plx-ui")]
#[command(about = "Product Placements Explorer web module")]
struct Cli {
    /// Listen port (overrides config file and environment)
    #[arg(long)]
    port: Option<u16>,

    /// Placement API endpoint (overrides config file and environment)
    #[arg(long)]
    placement_url: Option<String>,

    /// Explicit TOML config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting PLX web module (plx-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();

    // Resolve configuration: CLI > ENV > TOML > compiled defaults
    let mut resolver = ConfigResolver::new("plx-ui");
    if let Some(path) = cli.config {
        resolver = resolver.with_config_file(path);
    }
    let mut config = resolver.resolve();
    if let Some(port) = cli.port {
        config.listen_port = port;
    }
    if let Some(url) = cli.placement_url {
        config.placement_url = url;
    }
    info!("Placement endpoint: {}", config.placement_url);

    let config = Arc::new(config);
    let client = PlacementClient::new(&config)?;
    let orchestrator = FanOutOrchestrator::new(client);

    // Create application state and router
    let state = AppState::new(config.clone(), orchestrator);
    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind(("127.0.0.1", config.listen_port)).await?;
    info!("plx-ui listening on http://127.0.0.1:{}", config.listen_port);
    info!("Health check: http://127.0.0.1:{}/health", config.listen_port);

    axum::serve(listener, app).await?;

    Ok(())
}
