//! CLI argument parsing with clap

use clap::Parser;

/// Scaffold AIVA-powered subscription commerce apps
#[derive(Parser, Debug)]
#[command(name = "create-aiva-app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project
    pub project_name: Option<String>,

    /// Template to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Vertical for the customer-portal template
    #[arg(long)]
    pub vertical: Option<String>,

    /// Skip npm install
    #[arg(long)]
    pub skip_install: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
