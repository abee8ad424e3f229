mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{check, download, render};
use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the `-v` count when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Check(args) => check::run(&cli, args),
        Commands::Download(args) => download::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
