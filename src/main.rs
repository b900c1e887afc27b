//! Reel Index - command line entrypoint.
//!
//! Loads and validates configuration, writes default configuration files,
//! and reports the effective settings the stores would be built with.

use clap::{Parser, Subcommand};
use reel_index_lib::config::{self, ConfigLoader, LogConfig, ReelConfig};
use reel_index_lib::error::{
    install_default_reporter, report_error, ErrorContext, ReelError, ReelResult,
};
use reel_index_lib::stores::Stores;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Reel Index.
#[derive(Parser, Debug)]
#[clap(name = "Reel Index", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Print the effective configuration and the table layout it produces
    Inspect,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> ReelResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| ReelError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Describes a configuration source for error details.
fn describe_source(path: Option<&Path>) -> String {
    path.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    )
}

/// Runs the selected command.
fn run(args: Args) -> Result<(), ErrorContext> {
    let config_path = config::resolve_config_path(args.config.as_deref());
    let source = describe_source(config_path.as_deref());

    // Logging settings come from the configuration itself; fall back to
    // defaults so load errors are still reported
    let log_config = ConfigLoader::new(config_path.as_deref(), config::ENV_PREFIX)
        .load()
        .map(|config| config.log)
        .unwrap_or_default();
    init_logging(&log_config).map_err(|e| ErrorContext::new(e, "logging"))?;
    install_default_reporter();

    match args.command.unwrap_or(Command::Inspect) {
        Command::Validate => {
            info!("Validating configuration");
            reel_index_lib::init(config_path.as_deref())
                .map_err(|e| ErrorContext::new(e, "config").with_details(source))?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let details = output.display().to_string();
            write_default_config(&output)
                .map_err(|e| ErrorContext::new(e, "gen-config").with_details(details))?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Inspect => {
            let config = reel_index_lib::init(config_path.as_deref())
                .map_err(|e| ErrorContext::new(e, "config").with_details(source))?;
            inspect(&config).map_err(|e| ErrorContext::new(e, "inspect"))
        }
    }
}

/// Writes the default configuration as TOML.
fn write_default_config(output: &Path) -> ReelResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, config::to_toml(&ReelConfig::default())?)?;
    Ok(())
}

/// Prints the effective configuration and the table layout it produces.
fn inspect(config: &ReelConfig) -> ReelResult<()> {
    let stores = Stores::from_config(config);
    let stats = stores.movies.table_stats();
    let report = serde_json::json!({
        "config": config,
        "table": {
            "capacity": stats.capacity,
            "entries": stats.entries,
            "load_factor": stats.load_factor,
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();
    if let Err(context) = run(args) {
        report_error(context);
        process::exit(1);
    }
}
