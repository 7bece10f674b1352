//! CLI argument definitions for gantry.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gantry",
    version,
    about = "A reference-counted component install manager",
    long_about = "Gantry tracks named components and their declared dependencies, \
                  resolves full install orders, and tears components down with \
                  reference counting once nothing needs them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a command script (DEPEND/INSTALL/REMOVE/LIST/TREE/USES/END)
    Run {
        /// Script file; reads from stdin when omitted
        file: Option<PathBuf>,
        /// Print the final installed set in this format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Start an interactive session
    Shell,
}

pub fn parse() -> Cli {
    Cli::parse()
}
