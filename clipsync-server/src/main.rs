//! clipsync binary: runs the clipboard sync HTTP backend.
//!
//! Startup order: .env loading, settings, tracing, pool, migrations, serve.
//! Unrecoverable storage initialization is fatal before the listener binds.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clipsync_core::{build_database_url, Settings};
use clipsync_server::db::{create_pool, run_migrations};
use clipsync_server::http::{run_server, ServerConfig};

/// Arguments for the clipsync server
#[derive(Parser, Debug)]
#[command(name = "clipsync", about = "Clipboard sync backend", version)]
struct Args {
    /// Address to bind to (overrides APP_HOST/APP_PORT)
    #[arg(long, short = 'b')]
    bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) regardless of environment
    #[arg(long)]
    cors_permissive: bool,

    /// Database URL (overrides POSTGRES_* composition)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let settings = Settings::from_env().context("Failed to load settings")?;

    init_tracing(&settings.log_level)?;

    let database_url = match args.database_url {
        Some(url) => url,
        None => build_database_url()
            .context("DATABASE_URL not set and POSTGRES_* variables incomplete")?,
    };

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => format!("{}:{}", settings.app_host, settings.app_port)
            .parse()
            .context("APP_HOST/APP_PORT do not form a valid socket address")?,
    };

    tracing::info!(
        environment = %settings.environment,
        "Starting clipsync server on {}",
        bind_addr
    );

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to initialize database schema")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || settings.cors_allow_all(),
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with console output.
///
/// RUST_LOG wins over the settings-derived level when set.
fn init_tracing(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
