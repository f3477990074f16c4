//! Project Tracker - Main Entry Point
//!
//! Reads shell commands line by line from stdin (or a script file) and
//! prints each reply. The actual implementation is in the `project_tracker`
//! library.

use anyhow::{Context, Result};
use clap::Parser;
use project_tracker::{Reply, TrackerConfig, TrackerShell};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Project Tracker - track academic projects, due dates and priorities
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = TrackerConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting project tracker v{}", env!("CARGO_PKG_VERSION"));

    let mut shell = TrackerShell::new(config)?;
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run(&mut shell, BufReader::new(file), false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run(&mut shell, stdin.lock(), interactive)
        }
    }
}

/// Feed lines to the shell until input ends or the user quits
fn run(shell: &mut TrackerShell, input: impl BufRead, interactive: bool) -> Result<()> {
    let mut stdout = io::stdout();
    if interactive {
        writeln!(stdout, "Project Tracker. Type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match shell.execute(&line) {
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    writeln!(stdout, "{}", text)?;
                }
            }
            Ok(Reply::Quit) => break,
            Err(e) => {
                tracing::warn!(command = line.trim(), "command rejected: {}", e);
                writeln!(stdout, "Error: {}", e)?;
            }
        }
    }

    tracing::info!("{}", shell.tracker().stats());
    Ok(())
}
