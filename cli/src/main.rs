//! todo - terminal client for a /api/todos server.

use std::io;

use clap::Parser;
use eyre::{Context, Result};
use todo_cli::{session, Cli, TerminalSurface, UreqTransport};
use todo_core::{TodoApi, TodoApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the list on stdout.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();
    info!(base_url = %cli.base_url, "starting");

    let api = TodoApi::new(&cli.base_url);
    let surface = TerminalSurface::new(io::stdin().lock(), io::stdout(), cli.yes);
    let mut app = TodoApp::new(api, UreqTransport::new(), surface);

    session::run(&mut app).await.context("Terminal I/O failed")?;
    Ok(())
}
