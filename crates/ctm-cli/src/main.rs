use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ctm_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ctm_cli::menu::run(&mut stdin.lock(), &mut stdout.lock())
        .context("conference scheduler session failed")
}
