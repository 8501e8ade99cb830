//! Error types for the todo API client.
//!
//! # Design
//! `ApiError` describes what went wrong on a single round trip and keeps the
//! server's detail for logging. `SyncError` ties a failed round trip to the
//! app operation that issued it; its `Display` is the fixed, user-facing
//! message for that operation and never includes server text.

use std::fmt;

use thiserror::Error;

/// Errors produced while executing or interpreting a single request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response arrived (connection refused, reset, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. `message` is the `error`
    /// field of the body when one could be decoded.
    #[error("{}", http_detail(.status, .message))]
    Http { status: u16, message: Option<String> },

    /// A success body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

fn http_detail(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP error! status: {status}"),
    }
}

/// The user-triggered operations of `TodoApp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Toggle,
    Remove,
}

impl Operation {
    /// Banner text shown when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos. Please refresh the page.",
            Operation::Add => "Failed to add todo. Please try again.",
            Operation::Toggle => "Failed to update todo. Please try again.",
            Operation::Remove => "Failed to delete todo. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Toggle => "toggle",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

fn banner(operation: &Operation) -> &'static str {
    operation.failure_message()
}

/// A failed app operation. The cache is untouched when this is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", banner(.operation))]
pub struct SyncError {
    pub operation: Operation,
    #[source]
    pub source: ApiError,
}
