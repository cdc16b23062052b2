//! BandForge — interactive band and member manager.
//!
//! # Usage
//!
//! ```text
//! bandforge        # opens the interactive menu
//! ```
//!
//! There are no subcommands and no flags beyond `--help`/`--version`: the
//! whole surface is the menu. State is in-memory only and lives exactly as
//! long as the process.

mod menu;
mod prompt;

use std::io;

use anyhow::Result;
use clap::Parser;

use bandforge_core::Registry;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "bandforge",
    version,
    about = "Manage bands and their members from an interactive menu",
    long_about = None,
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    // The registry lives here and nowhere else; the menu only borrows it.
    let mut registry = Registry::new();
    menu::run(&mut registry, &mut stdin.lock(), &mut stdout.lock())
}
