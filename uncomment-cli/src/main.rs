//! Uncomment CLI - strips comments from every source file under a directory.
//!
//! This is the main entry point for the uncomment CLI application.
//! It uses clap for argument parsing, loads the optional configuration file,
//! and hands the directory to the uncomment command.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::usage, run_uncomment, UncommentArgs};
use config::Config;
use error::{Result, UncommentError};

/// Uncomment - recursively strip comments from C-family source files
///
/// Every file with the configured extension under PATH is rewritten in
/// place with its line and block comments removed. String, verbatim string
/// and character literals are left untouched.
#[derive(Parser, Debug)]
#[command(name = "uncomment")]
#[command(author = "Uncomment Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recursively strips comments from source files", long_about = None)]
struct Cli {
    /// Directory to uncomment (exactly one)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "UNCOMMENT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "UNCOMMENT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "UNCOMMENT_NO_COLOR")]
    no_color: bool,

    /// Extension of the files to uncomment (default: cs)
    #[arg(short, long)]
    extension: Option<String>,

    /// Stop at the first file that cannot be read or written
    #[arg(long)]
    fail_fast: bool,

    /// Number of files processed in parallel (0 = one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Main entry point for the uncomment CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and runs the uncomment command on the single directory given.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let directory = match cli.paths.as_slice() {
        [directory] => directory.clone(),
        _ => {
            println!("{}", usage(cli.extension.as_deref()));
            return Ok(());
        }
    };

    let config = load_config(cli.config.as_deref())?;

    let args = UncommentArgs {
        verbose: cli.verbose,
        directory,
        extension: cli.extension,
        fail_fast: cli.fail_fast,
        jobs: cli.jobs,
    };
    run_uncomment(args, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so that stdout carries only the per-file report.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| UncommentError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_single_path() {
        let cli = Cli::parse_from(["uncomment", "src"]);
        assert_eq!(cli.paths, vec![PathBuf::from("src")]);
        assert!(!cli.verbose);
        assert!(!cli.fail_fast);
        assert_eq!(cli.extension, None);
        assert_eq!(cli.jobs, None);
    }

    #[test]
    fn test_cli_parse_no_path() {
        let cli = Cli::parse_from(["uncomment"]);
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn test_cli_parse_many_paths() {
        let cli = Cli::parse_from(["uncomment", "a", "b"]);
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_cli_parse_extension() {
        let cli = Cli::parse_from(["uncomment", "-e", "java", "src"]);
        assert_eq!(cli.extension, Some("java".to_string()));
    }

    #[test]
    fn test_cli_parse_jobs() {
        let cli = Cli::parse_from(["uncomment", "--jobs", "0", "src"]);
        assert_eq!(cli.jobs, Some(0));
    }

    #[test]
    fn test_cli_parse_fail_fast() {
        let cli = Cli::parse_from(["uncomment", "--fail-fast", "src"]);
        assert!(cli.fail_fast);
    }

    #[test]
    fn test_cli_parse_config() {
        let cli = Cli::parse_from(["uncomment", "--config", "/path/to/uncomment.toml", "src"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/uncomment.toml")));
    }

    #[test]
    fn test_cli_parse_verbose_and_no_color() {
        let cli = Cli::parse_from(["uncomment", "-v", "--no-color", "src"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_rejects_bad_jobs() {
        assert!(Cli::try_parse_from(["uncomment", "--jobs", "many", "src"]).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/uncomment.toml")));
        assert!(matches!(result, Err(UncommentError::Config(_))));
    }
}
