//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Employee API - Read-only employee directory over SeaORM
#[derive(Parser, Debug)]
#[command(name = "employee-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create missing tables and start the HTTP server
    Serve(ServeArgs),

    /// Create missing tables from the entity definitions
    Schema,

    /// Insert demo departments, employees and telephones
    Seed,
}

/// Arguments for the serve command
///
/// Unset values fall back to `SERVER_HOST` / `SERVER_PORT`.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::try_parse_from(["employee-api", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["employee-api", "seed", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Seed));
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli =
            Cli::try_parse_from(["employee-api", "serve", "-H", "127.0.0.1", "--port", "9000"])
                .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
    }
}
