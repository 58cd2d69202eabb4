//! # Merce Backend
//!
//! Entry point: loads the environment, parses the admin command surface, and
//! either runs a one-shot database operation or starts the HTTP server.

use anyhow::Result;
use clap::Parser;
use merce_backend::cli::{Cli, Command};
use merce_backend::config::{self, AppConfig, DbConfig};
use merce_backend::database::{create_pool, run_migrations, seeder};
use merce_backend::server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine: every variable has a fallback. An
    // unreadable or malformed one aborts startup.
    config::load_env()?;

    init_tracing();

    let cli = Cli::parse();
    let app_config = AppConfig::from_env();
    let db_config = DbConfig::from_env();

    match cli.command {
        Some(Command::Migrate) => {
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;
        }
        Some(Command::Seed) => {
            let pool = create_pool(&db_config).await?;
            seeder::seed_users(&pool, seeder::DEFAULT_SEED_COUNT).await?;
        }
        None => {
            info!("Welcome to {}", app_config.app_name);

            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let addr = app_config.listen_addr();
            let server = Server::new(pool.clone(), app_config);

            seeder::seed_users(&pool, seeder::DEFAULT_SEED_COUNT).await?;

            server.run(&addr).await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
