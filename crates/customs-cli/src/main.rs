//! # customs CLI entry point
//!
//! Parses command-line arguments, configures logging from `-v`, and
//! dispatches to subcommand handlers. Handlers return the process exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use customs_cli::catalog::{run_countries, run_digest, run_lookup, run_search, LookupArgs, SearchArgs};
use customs_cli::check::{run_batch, run_check, BatchArgs, CheckArgs};
use customs_cli::Session;

/// Customs rules engine
///
/// Classifies shipment items by HSN code against global controls and
/// destination import policy, before a booking is submitted.
#[derive(Parser, Debug)]
#[command(name = "customs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one HSN code for a destination country.
    Check(CheckArgs),

    /// Validate every item of a shipment file for a destination country.
    Batch(BatchArgs),

    /// Show the catalog entry for an HSN code.
    Lookup(LookupArgs),

    /// Search the catalog by description or common name.
    Search(SearchArgs),

    /// List destination countries with restriction entries.
    Countries,

    /// Print the SHA-256 digest of the active ruleset.
    Digest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("customs CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = Session::open(cli.config.as_deref()).and_then(|session| match &cli.command {
        Commands::Check(args) => run_check(args, &session),
        Commands::Batch(args) => run_batch(args, &session),
        Commands::Lookup(args) => run_lookup(args, &session),
        Commands::Search(args) => run_search(args, &session),
        Commands::Countries => run_countries(&session),
        Commands::Digest => run_digest(&session),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
