//! Warbler entry-point: applies migrations or serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use warbler::inbound::http::health::HealthState;
use warbler::outbound::persistence::{DbPool, run_pending_migrations};

#[derive(Debug, Parser)]
#[command(name = "warbler", version, about = "Warbler social data service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply pending schema migrations and exit.
    Migrate,
    /// Start the HTTP server (the default).
    Serve,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    // Settings come from the environment and config files only; the
    // subcommand arguments belong to clap.
    let settings = ServerSettings::load_from_iter([OsString::from("warbler")])
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => {
            let url = settings.database_url.clone().ok_or_else(|| {
                std::io::Error::other("WARBLER_DATABASE_URL must be set to run migrations")
            })?;
            migrate(url).await
        }
        Command::Serve => serve(settings).await,
    }
}

async fn migrate(database_url: String) -> std::io::Result<()> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;
    info!(count = applied.len(), "schema up to date");
    Ok(())
}

async fn serve(settings: ServerSettings) -> std::io::Result<()> {
    if settings.migrate_on_startup {
        if let Some(url) = settings.database_url.clone() {
            migrate(url).await?;
        }
    }

    let mut config = ServerConfig::new(settings.socket_addr()?);
    if let Some(pool_config) = settings.pool_config() {
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
