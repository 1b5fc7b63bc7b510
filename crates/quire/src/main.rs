//! Quire CLI - documentation content pipeline.
//!
//! Provides commands for:
//! - `show`: Render a single chapter
//! - `list`: List chapters of one or all categories
//! - `check`: Render every chapter and report failures

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, GlobalArgs, ListArgs, ShowArgs};
use output::Output;

/// Quire - documentation content pipeline.
#[derive(Parser)]
#[command(name = "quire", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single chapter.
    Show(ShowArgs),
    /// List chapters without rendering them.
    List(ListArgs),
    /// Render every chapter and report the ones that fail.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(&cli.global),
        Commands::List(args) => args.execute(&cli.global),
        Commands::Check(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
