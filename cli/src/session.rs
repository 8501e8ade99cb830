//! Interactive command loop.

use std::io::{self, BufRead, Write};

use todo_core::{Row, TodoApp, Transport};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::terminal::TerminalSurface;

pub const PROMPT: &str = "> ";

pub type TerminalApp<T, R, W> = TodoApp<T, TerminalSurface<R, W>>;

/// Load the list, then execute commands until `quit` or end of input.
///
/// Failed operations are already on screen as a banner and in the log, so
/// they do not end the session; only terminal I/O errors do.
pub async fn run<T, R, W>(app: &mut TerminalApp<T, R, W>) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    if let Err(err) = app.load().await {
        debug!(operation = %err.operation, "initial load failed");
    }

    while let Some(line) = app.surface_mut().read_line(PROMPT)? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                app.surface_mut().message(&err.to_string())?;
                continue;
            }
        };

        let result = match command {
            Command::Add(text) => {
                app.set_input(text);
                app.submit().await
            }
            Command::Toggle(n) => match row_at(app, n) {
                Some(row) => app.toggle(&row.id, row.toggle_target()).await,
                None => {
                    app.surface_mut().message(&format!("no row {n}"))?;
                    continue;
                }
            },
            Command::Remove(n) => match row_at(app, n) {
                Some(row) => app.remove(&row.id).await,
                None => {
                    app.surface_mut().message(&format!("no row {n}"))?;
                    continue;
                }
            },
            Command::List => {
                app.refresh();
                continue;
            }
            Command::Reload => app.load().await,
            Command::Help => {
                app.surface_mut().message(HELP)?;
                continue;
            }
            Command::Quit => break,
        };

        if let Err(err) = result {
            debug!(operation = %err.operation, "operation failed");
        }
    }
    Ok(())
}

fn row_at<T, R, W>(app: &TerminalApp<T, R, W>, n: usize) -> Option<Row>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    app.view().rows.get(n.checked_sub(1)?).cloned()
}
