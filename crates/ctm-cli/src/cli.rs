//! Command-line argument definitions.

use clap::Parser;

/// Conference track scheduler.
///
/// Accepts talk submissions interactively and assigns each to the first
/// session with room, opening a new track when every session is full.
/// Nothing persists across runs; the schedule lives for one session.
#[derive(Debug, Parser)]
#[command(name = "ctm", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
