//! MapAudit CLI - Command-line interface
//!
//! Fetches the upstream version index and datasets for the requested
//! client version, diffs them against the renderer's built-in content
//! tables and prints the coverage report to stdout.
//!
//! Exit status: 0 on a completed audit, 1 on a fetch or data failure,
//! 2 when the requested version is not in the upstream index.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mapaudit::audit;
use mapaudit::fetch::{JsonFetcher, ReqwestClient, UpstreamSource};
use mapaudit::registry::BuiltinRegistry;

/// Report blocks and biomes the renderer has not implemented yet.
#[derive(Debug, Parser)]
#[command(name = "mapaudit", version, about)]
struct Cli {
    /// The game client version to compare with, for example: 1.19
    #[arg(short = 'c', long = "client-version")]
    client_version: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match ReqwestClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    let fetcher = JsonFetcher::new(client);
    let source = UpstreamSource::new();
    let registry = BuiltinRegistry::new();

    let mut stdout = std::io::stdout();
    match audit::run(&fetcher, &source, &registry, &cli.client_version, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_version_not_found() => {
            println!(
                "Version {} was not found in {}",
                cli.client_version,
                source.index_url()
            );
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
