//! # bee Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: bee Contributors
//!
//! ## Overview
//!
//! Entry point for the bee CLI. It handles:
//! - Command-line argument parsing using Clap (after rewriting Go-style
//!   single-dash long flags such as `-isDownload=true`)
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//! - Mapping failures to process exit statuses
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! bee --help
//!
//! # Serve the docs with info-level logging
//! bee -v rundocs -isDownload=true
//! ```
//!
//! Command processing flow:
//! 1. Normalize and parse command-line args via Clap
//! 2. Configure logging based on verbosity level (`RUST_LOG` overrides it)
//! 3. Route to the command handler
//! 4. Print any error and exit with its status (2 for missing docs, 1 otherwise)
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers
mod common; // Shared utilities (archive, fs, network)
mod core; // Core infrastructure (errors)
#[cfg(test)]
mod test_support;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "bee",
    about = "bee: project scaffolding tools",
    long_about = "Project scaffolding tools.\n\
                  `bee rundocs` downloads and serves the Swagger UI docs bundle.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the Swagger docs server, optionally downloading the docs first (default port 8089).
    Rundocs(commands::rundocs::RundocsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(commands::rundocs::normalize_go_style_flags(
        std::env::args_os(),
    ));

    // Map -v counts onto a default filter; RUST_LOG still takes precedence.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Rundocs(args) => commands::rundocs::handle_rundocs(args).await,
    };

    // Errors are printed once for the user; the exit status comes from the
    // typed error if one is in the chain.
    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(core::error::exit_code_for(&e));
    }

    Ok(())
}
