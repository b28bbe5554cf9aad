//! CLI argument definitions for woah.
//!
//! Uses `clap` derive macros. Running `woah` with no subcommand behaves
//! like `woah home`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "woah",
    version,
    about = "Locate the woah data home and its project templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the platform data home directory
    Home,

    /// Show where a template repository would live in the data home
    Template {
        /// Git URL of the template repository
        url: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
