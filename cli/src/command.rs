//! Parsing of interactive command lines.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a todo; the text is passed on untrimmed.
    Add(String),
    /// Flip the completion flag of the todo shown at this 1-based row.
    Toggle(usize),
    /// Delete the todo shown at this 1-based row.
    Remove(usize),
    /// Redraw from the cache.
    List,
    /// Re-fetch the whole collection.
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs a row number")]
    MissingRow(&'static str),

    #[error("`{0}` is not a row number")]
    BadRow(String),
}

pub const HELP: &str = "\
commands:
  add <text>      add a todo (also: a)
  toggle <n>      complete or reopen row n (also: t, done)
  rm <n>          delete row n (also: delete, del)
  ls              redraw the list
  reload          fetch the list again
  help            show this text
  quit            leave (also: exit, q)";

impl Command {
    /// Parse one input line. A blank line yields `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let command = match word {
            "add" | "a" => Command::Add(rest.trim_end_matches(['\r', '\n']).to_string()),
            "toggle" | "t" | "done" => Command::Toggle(row("toggle", rest)?),
            "rm" | "delete" | "del" => Command::Remove(row("rm", rest)?),
            "ls" | "list" => Command::List,
            "reload" | "load" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn row(name: &'static str, rest: &str) -> Result<usize, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingRow(name));
    }
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow(rest.to_string())),
    }
}
