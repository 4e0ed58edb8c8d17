// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! xk6-explore - Explore k6 extensions for automatic resolution.
//!
//! This is the binary entry point.

mod explore;
mod output;
mod shutdown;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use xk6_explore_config::ExploreConfig;
use xk6_explore_core::ExploreError;

use crate::explore::ExploreArgs;

const EXPLORE_LONG_ABOUT: &str = "\
List available k6 extensions from the official extension registry.

Filter extensions by type (javascript, output, subcommand) or tier (official, community).
Supports table output (default), a detailed list, and JSON for machine-readable output.

When using the --json flag, the output is an array of extension objects.
Each extension object contains the following properties:

- module (string) The Go module path of the extension
- tier (string) Extension tier: official or community
- description (string) Brief description of the extension's functionality
- latest (string) Latest version tag (e.g., v0.1.0)
- versions (array of strings) All available version tags
- imports (array of strings) JavaScript module import paths (for JavaScript extensions)
- outputs (array of strings) Output type names (for output extensions)
- subcommands (array of strings) Subcommand names (for subcommand extensions)
- repo (object) Source repository, with its url";

const EXPLORE_EXAMPLES: &str = "\
Examples:
  # List all extensions (table output):
  xk6-explore explore

  # Show only module and description columns (brief output):
  xk6-explore explore --brief

  # Output as JSON (for CI/CD integration):
  xk6-explore explore --json

  # Filter by tier or type:
  xk6-explore explore --tier official --type javascript";

/// xk6-explore - Explore k6 extensions for automatic resolution.
#[derive(Parser, Debug)]
#[command(name = "xk6-explore", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Explore k6 extensions for Automatic Resolution.
    #[command(long_about = EXPLORE_LONG_ABOUT, after_help = EXPLORE_EXAMPLES)]
    Explore(ExploreArgs),
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            xk6_explore_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Explore(args)) => {
            let level = if args.verbose {
                "debug"
            } else {
                config.log.level.as_str()
            };
            init_tracing(level);

            let cancel = shutdown::install_signal_handler();
            if let Err(e) = explore::run_explore(&config, &args, &cancel).await {
                eprintln!("{}", error_message(&e));
                std::process::exit(1);
            }
        }
        None => {
            let _ = Cli::command().print_help();
        }
    }
}

fn load_config(cli: &Cli) -> Result<ExploreConfig, Vec<xk6_explore_config::ConfigError>> {
    match cli.config.as_deref() {
        Some(path) => xk6_explore_config::load_and_validate_path(path),
        None => xk6_explore_config::load_and_validate(),
    }
}

/// Format a command failure for stderr. Input errors get a pointer to the usage text.
fn error_message(err: &ExploreError) -> String {
    if err.is_configuration() {
        format!("error: {err}\nsee `xk6-explore explore --help` for usage")
    } else {
        format!("error: {err}")
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let level = log_level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xk6_explore={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
