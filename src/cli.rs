//! Command-line surface.
//!
//! Zero arguments starts the HTTP server; an admin subcommand runs a
//! one-shot database operation and exits. Anything else falls through to
//! clap's usage error and a non-zero exit.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "merce-backend", about = "Minimal e-commerce backend scaffold")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create or update database tables for every registered model.
    #[command(name = "db:migrate")]
    Migrate,

    /// Insert a batch of synthetic users into the database.
    #[command(name = "db:seed")]
    Seed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_selects_server_startup() {
        let cli = Cli::try_parse_from(["merce-backend"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn migrate_command_parses() {
        let cli = Cli::try_parse_from(["merce-backend", "db:migrate"]).unwrap();
        assert_eq!(cli.command, Some(Command::Migrate));
    }

    #[test]
    fn seed_command_parses() {
        let cli = Cli::try_parse_from(["merce-backend", "db:seed"]).unwrap();
        assert_eq!(cli.command, Some(Command::Seed));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["merce-backend", "db:rollback"]).is_err());
    }
}
