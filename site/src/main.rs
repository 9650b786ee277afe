//! # tiffany
//!
//! Renders the A Tiffany Affair and Design homepage to a static HTML file.
//!
//! ```bash
//! # Built-in copy to stdout
//! tiffany render
//!
//! # Custom copy to a file
//! tiffany content > content.json
//! tiffany check --content content.json
//! tiffany render --content content.json --out index.html
//! ```

mod cli;
mod commands;

use std::any::Any;
use std::panic;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Args, Command};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the rendered page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("tiffany v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Render { content, out, year } => {
            commands::render(content.as_deref(), out.as_deref(), year)
        }
        Command::Content => commands::dump_content(),
        Command::Check { content } => commands::check(&content),
    }
}

fn main() -> ExitCode {
    install_broken_pipe_handler();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
