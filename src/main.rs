//! Poll Importer - interactive authoring wizard for poll category files
//!
//! Prompts an operator through a sequence of categories, each with a
//! channel and one or more emote-tagged options, then writes the JSON
//! import file consumed by the bot's `category import` command.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use poll_importer::wizard::Wizard;
use poll_importer::wizard::colors;
use poll_importer::wizard::colors::ansi::*;

fn main() -> Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Pretty startup banner
    println!();
    println!(
        "{}{}  Poll Importer {}{}",
        BOLD,
        MAGENTA,
        env!("CARGO_PKG_VERSION"),
        RESET
    );
    println!("{}", colors::separator(50));
    println!(
        "{}Answer the prompts to build categories; the file is{}",
        DIM, RESET
    );
    println!(
        "{}written once the last category is entered.{}",
        DIM, RESET
    );
    println!("{}", colors::separator(50));
    println!();

    Wizard::new()?.run()
}
