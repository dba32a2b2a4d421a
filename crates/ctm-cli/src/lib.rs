//! Interactive console shell for the conference track scheduler.
//!
//! Everything here is thin I/O: reading menu choices and talk details,
//! and rendering what ctm-core decided.

mod cli;
pub mod commands;
pub mod menu;
mod ui;

pub use cli::Cli;
