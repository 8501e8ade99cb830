//! Terminal `Surface`: draws views as text and reads answers from a line
//! reader.
//!
//! Item text goes out as plain text. Control characters, ESC included, are
//! escaped so a stored todo cannot move the cursor or recolor the terminal.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use todo_core::{Surface, View};
use tracing::warn;

pub const EMPTY_STATE: &str = "No todos yet. Add one above!";

pub struct TerminalSurface<R, W> {
    input: R,
    out: W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, out: W, assume_yes: bool) -> Self {
        Self {
            input,
            out,
            assume_yes,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    fn draw(&mut self, view: &View) -> io::Result<()> {
        if view.loading {
            let line = if view.submit.enabled {
                "Loading...".to_string()
            } else {
                view.submit.label.to_string()
            };
            return writeln!(self.out, "{}", line.as_str().dimmed());
        }

        if let Some(error) = &view.error {
            writeln!(self.out, "{}", error.as_str().red().bold())?;
        }

        if view.empty {
            writeln!(self.out, "{}", EMPTY_STATE.dimmed())?;
        } else {
            for (index, row) in view.rows.iter().enumerate() {
                let text = plain_text(&row.text);
                if row.completed {
                    writeln!(self.out, "{:>3}. {} {}", index + 1, "[x]".green(), text.as_str().strikethrough())?;
                } else {
                    writeln!(self.out, "{:>3}. [ ] {}", index + 1, text)?;
                }
            }
        }

        let summary = &view.summary;
        writeln!(
            self.out,
            "{}  {}  {}",
            summary.total_label(),
            summary.completed_label().as_str().green(),
            summary.pending_label().as_str().yellow()
        )?;

        if view.input.focus {
            writeln!(self.out, "{}", "Type `add <text>` to add a todo.".dimmed())?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Surface for TerminalSurface<R, W> {
    fn apply(&mut self, view: &View) {
        if let Err(err) = self.draw(view) {
            warn!(error = %err, "failed to draw view");
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match self.read_line(&format!("{prompt} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}

/// Escape control characters so `text` prints literally.
pub fn plain_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
