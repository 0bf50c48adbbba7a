//! webshell native entry point.
//!
//! Stands in for the browser page: prints the greeting, then feeds each
//! stdin line to the session and prints the result the way the page's
//! output area shows it (`$ <line>` followed by the command output).
//! Exits on EOF. Diagnostics go to stderr via `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use webshell_terminal::ShellSession;
use webshell_types::config::ShellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path from CLI arg or WEBSHELL_CONFIG env var.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WEBSHELL_CONFIG").ok())
        .map(PathBuf::from);
    let config = match config_path {
        Some(path) => ShellConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ShellConfig::default(),
    };

    let mut shell = ShellSession::with_config(config)?;
    log::info!("Starting webshell as {}", shell.user());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    stdout.write_all(shell.welcome().as_bytes())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let output = shell.command(&line);
        write!(stdout, "$ {line}\n{output}")?;
        stdout.flush()?;
    }

    log::info!("EOF after {} commands", shell.history().len());
    Ok(())
}
