//! blog-api: In-memory blog CRUD service
//!
//! Serves a single collection of blogs over HTTP. The collection is seeded
//! at startup and lives only as long as the process.

use std::net::IpAddr;

use clap::Parser;
use tracing::{info, warn};

use blog_api::{build_state, create_router, logging, shutdown_signal, Config, DeleteMode};

#[derive(Parser)]
#[command(name = "blog-api")]
#[command(about = "In-memory blog CRUD service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "blog-api.toml")]
    config: String,

    /// Bind address (overrides config file)
    #[arg(long, env = "BLOG_API_HOST")]
    host: Option<IpAddr>,

    /// HTTP port (overrides config file)
    #[arg(short, long, env = "BLOG_API_PORT")]
    port: Option<u16>,

    /// How DELETE /blogs/{id} interprets the id (overrides config file)
    #[arg(long, env = "BLOG_API_DELETE_MODE", value_enum)]
    delete_mode: Option<DeleteMode>,

    /// Start with an empty collection
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load or create default config
    let (mut config, found) = Config::load_or_default(&cli.config)?;

    // Apply CLI overrides
    config.apply_overrides(cli.host, cli.port, cli.delete_mode, cli.no_seed);

    logging::init(&config.logging)?;

    info!("Starting blog-api");
    if found {
        info!("Config file: {}", cli.config);
    } else {
        info!("Config file {} not found, using defaults", cli.config);
    }

    if config.store.delete_mode == DeleteMode::Position {
        warn!("DELETE /blogs/{{id}} removes by position, not by blog id");
    }

    let state = build_state(&config);
    info!(blogs = state.store.len().await, "Blog store ready");

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
