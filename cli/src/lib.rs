//! Terminal host for `todo-core`.
//!
//! Supplies the two collaborators `TodoApp` needs: `UreqTransport` for the
//! HTTP round trips and `TerminalSurface` for drawing and confirmations. The
//! `session` module turns input lines into app operations.

pub mod command;
pub mod config;
pub mod session;
pub mod terminal;
pub mod transport;

pub use command::Command;
pub use config::Cli;
pub use terminal::TerminalSurface;
pub use transport::UreqTransport;
