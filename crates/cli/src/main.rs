//! Bank Queue CLI - interactive token queue for a single branch
//!
//! Customers take tokens and check their place in line; staff serve,
//! delete and review tokens. State lives only for the process lifetime.

mod constants;
mod input;
mod logging;
mod menu;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use constants::{DEFAULT_BRANCH, DEFAULT_LOG_DIRECTIVE};
use logging::LogFormat;
use session::{Session, SessionOptions};
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bankqueue")]
#[command(about = "Single-branch bank token queue", long_about = None)]
#[command(version)]
struct Cli {
    /// Branch name shown in the menu banner
    #[arg(long, env = "BANKQUEUE_BRANCH", default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Log output format (logs are written to stderr)
    #[arg(long, env = "BANKQUEUE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Log filter directive, e.g. "info" or "bankqueue_core=debug" (RUST_LOG wins)
    #[arg(long, env = "BANKQUEUE_LOG", default_value = DEFAULT_LOG_DIRECTIVE)]
    log_level: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Also print the queue summary as JSON
    #[arg(long)]
    json_summary: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    logging::init(cli.log_format, &cli.log_level).context("Failed to initialize logging")?;

    info!(
        version = bankqueue_core::VERSION,
        branch = %cli.branch,
        "bank queue starting"
    );

    let options = SessionOptions {
        branch: cli.branch,
        json_summary: cli.json_summary,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    session.run().context("Terminal I/O failed")?;

    Ok(())
}
