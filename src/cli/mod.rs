//! Command-line interface for vibe
//!
//! A single command: scan targets and write chunk files, or `clear` them.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod clear;
mod pack;
mod utils;

/// Pack project files into line-bounded chunks for LLM chats
#[derive(Parser)]
#[command(name = "vibe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pack: pack::PackArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "vibe", &mut std::io::stdout());
        return Ok(());
    }

    pack::run(cli.pack)
}
