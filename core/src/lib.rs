//! Client core for the `/api/todos` task-list service.
//!
//! # Overview
//! Two layers. `TodoApi` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network (host-does-IO
//! pattern). `TodoApp` sits on top: it keeps an in-memory mirror of the
//! remote collection, runs each user operation as one round trip through a
//! host-supplied `Transport`, and pushes a freshly rendered `View` to a
//! host-supplied `Surface` whenever its state changes.
//!
//! # Design
//! - `TodoApi` is stateless; it holds only `base_url`.
//! - `TodoApp` mutates its cache only from confirmed server responses.
//! - `render` is pure, so everything except drawing is testable without a UI.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod activity;
pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod types;

pub use app::{Outcome, Surface, TodoApp, DELETE_PROMPT};
pub use client::{TodoApi, COLLECTION_PATH};
pub use error::{ApiError, Operation, SyncError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render, Row, Summary, View, ViewState};
pub use types::{CreateTodo, ErrorBody, TodoItem, UpdateTodo};
