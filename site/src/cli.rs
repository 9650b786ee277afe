//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tiffany")]
#[command(about = "Render the A Tiffany Affair homepage to static HTML")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to a file or stdout
    Render {
        /// Content JSON file (built-in homepage copy when omitted)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output HTML file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Footer year (current year when omitted)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print the built-in content as JSON, a starting point for a content file
    Content,

    /// Load and validate a content file
    Check {
        /// Content JSON file
        #[arg(short, long)]
        content: PathBuf,
    },
}
