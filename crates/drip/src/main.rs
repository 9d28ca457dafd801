//! drip CLI - package manager for Droplet projects
//!
//! This is the main entry point for the drip command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);
    output::set_quiet(cli.quiet);

    let project = cli.project.as_deref();
    match cli.command {
        Commands::Init(args) => commands::init::run(args, project),
        Commands::Install(args) => commands::install::run(args, project),
        Commands::Remove(args) => commands::remove::run(args, project),
        Commands::List(args) => commands::list::run(args, project),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// `RUST_LOG` overrides the flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
