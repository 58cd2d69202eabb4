pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::{AppConfig, DbConfig};
pub use database::DbPool;
pub use error::{AppError, Result};
