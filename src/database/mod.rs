//! Database pool setup and registry-driven auto-migration.

pub mod models;
pub mod registry;
pub mod repository;
pub mod seeder;

use crate::config::DbConfig;
use crate::error::{AppError, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::info;

pub type DbPool = PgPool;

/// Session timezone applied to every connection.
const TIMEZONE: &str = "Asia/Jakarta";

/// Parse the interpolated connection string into driver options, with TLS
/// disabled and the fixed session timezone set.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions> {
    let options = config
        .connection_string()
        .parse::<PgConnectOptions>()
        .map_err(|e| AppError::Database(format!("invalid connection options: {e}")))?
        .ssl_mode(PgSslMode::Disable)
        .options([("TimeZone", TIMEZONE)]);

    Ok(options)
}

/// Open the connection pool. Connectivity is verified eagerly; a failure
/// here aborts startup.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .connect_with(connect_options(config)?)
        .await
        .map_err(|e| {
            AppError::Database(format!(
                "failed to connect to {}:{}/{}: {e}",
                config.host, config.port, config.name
            ))
        })?;

    info!("Connected to database {}", config.name);
    Ok(pool)
}

/// Apply auto-migration for every registered model, in registry order.
///
/// The first failure halts the run and leaves the remaining models
/// unmigrated; there is no transaction around the whole pass.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    for model in registry::MODELS {
        sqlx::query(model.ddl)
            .execute(pool)
            .await
            .map_err(|e| AppError::Migration(format!("{}: {e}", model.name)))?;
        info!("Migrated model: {}", model.name);
    }

    info!("Migration success");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> DbConfig {
        DbConfig {
            host: "dbhost".to_string(),
            user: "shopuser".to_string(),
            password: "secret".to_string(),
            name: "shop".to_string(),
            port: "5433".to_string(),
        }
    }

    #[test]
    fn connect_options_carry_db_config() {
        let options = connect_options(&test_config()).unwrap();

        assert_eq!(options.get_host(), "dbhost");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "shopuser");
        assert_eq!(options.get_database(), Some("shop"));
    }

    #[test]
    fn malformed_port_is_rejected_by_the_driver() {
        let mut config = test_config();
        config.port = "not-a-port".to_string();

        assert!(connect_options(&config).is_err());
    }
}
