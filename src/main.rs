//! catalog-edit: CLI for maintaining the catalogue embedded in a static HTML page
//!
//! Inserts or removes entries in the page's embedded `aiTools` and
//! `learningTemplates` array literals, keeps the statistics counters in
//! sync, and backs the page up before every write.

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

use catalog_edit::cli::{self, Cli, Outcome};
use catalog_edit::config;

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the catalog-edit CLI.
fn main() -> ExitCode {
    let args = Cli::parse();

    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    match cli::run(&args, &cfg) {
        Ok(Outcome::Done | Outcome::Cancelled | Outcome::NotFound) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "operation failed");
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_selection() {
        assert_eq!(get_log_level(0, true, "debug"), Level::ERROR);
        assert_eq!(get_log_level(0, false, "debug"), Level::DEBUG);
        assert_eq!(get_log_level(0, false, "nonsense"), Level::WARN);
        assert_eq!(get_log_level(1, false, "warn"), Level::INFO);
        assert_eq!(get_log_level(3, false, "warn"), Level::TRACE);
    }
}
