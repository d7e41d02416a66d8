//! create-aiva-app - Scaffold AIVA-powered subscription commerce apps
//!
//! This is the main entry point for the create-aiva-app command-line
//! interface.

mod cli;
mod output;
mod prompts;
mod scaffold;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run the workflow; any failure is one error message and exit 1
    if let Err(e) = scaffold::run(cli).await {
        eprintln!();
        output::error(&format!("{:#}", e));
        eprintln!();
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Default to warn: progress comes from the spinner, not the log
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
