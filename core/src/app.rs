//! Stateful mirror of the remote todo collection.
//!
//! # Design
//! `TodoApp` owns the cached items and the transient UI flags, and is handed
//! its two collaborators at construction: a `Transport` that performs one
//! HTTP round trip and a `Surface` that draws a `View`. Every operation
//! issues exactly one request and mutates the cache only after the server
//! confirmed it, trusting the returned representation. A failed request
//! leaves the cache untouched and raises the operation's fixed banner text.

use tracing::{debug, info, warn};

use crate::activity::Activity;
use crate::client::TodoApi;
use crate::error::{ApiError, Operation, SyncError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::{render, View, ViewState};
use crate::types::{CreateTodo, TodoItem, UpdateTodo};

/// Prompt shown before a delete request is issued.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

/// The UI side of the app: draws frames and answers confirmations.
pub trait Surface {
    fn apply(&mut self, view: &View);

    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Result of an operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and the cache reflects the server's answer.
    Applied,
    /// Nothing was sent: blank input or a declined confirmation.
    Skipped,
}

pub struct TodoApp<T, S> {
    api: TodoApi,
    transport: T,
    surface: S,
    items: Vec<TodoItem>,
    error: Option<String>,
    draft: String,
    focus_input: bool,
    loading: Activity,
    submitting: Activity,
}

impl<T: Transport, S: Surface> TodoApp<T, S> {
    pub fn new(api: TodoApi, transport: T, surface: S) -> Self {
        Self {
            api,
            transport,
            surface,
            items: Vec::new(),
            error: None,
            draft: String::new(),
            focus_input: false,
            loading: Activity::new(),
            submitting: Activity::new(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn view(&self) -> View {
        render(&ViewState {
            items: &self.items,
            error: self.error.as_deref(),
            loading: self.loading.is_active(),
            submitting: self.submitting.is_active(),
            draft: &self.draft,
            focus_input: self.focus_input,
        })
    }

    /// Redraw the surface from the current state.
    pub fn refresh(&mut self) {
        let view = self.view();
        self.surface.apply(&view);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.focus_input = false;
    }

    /// Fetch the whole collection and replace the cache with it.
    pub async fn load(&mut self) -> Result<Outcome, SyncError> {
        let request = self.api.build_list_todos();
        let result = self
            .round_trip(request)
            .await
            .and_then(|response| self.api.parse_list_todos(response));

        match result {
            Ok(items) => {
                info!(count = items.len(), "loaded todos");
                self.items = items;
                self.refresh();
                Ok(Outcome::Applied)
            }
            Err(err) => Err(self.fail(Operation::Load, err)),
        }
    }

    /// Add the current input draft.
    pub async fn submit(&mut self) -> Result<Outcome, SyncError> {
        let draft = self.draft.clone();
        self.add(&draft).await
    }

    /// Create an item from `text` and prepend the server's copy of it.
    pub async fn add(&mut self, text: &str) -> Result<Outcome, SyncError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring blank todo");
            self.focus_input = true;
            self.refresh();
            return Ok(Outcome::Skipped);
        }

        let input = CreateTodo {
            text: text.to_string(),
        };
        let request = match self.api.build_create_todo(&input) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(Operation::Add, err)),
        };

        let submitting = self.submitting.begin();
        let result = self
            .round_trip(request)
            .await
            .and_then(|response| self.api.parse_create_todo(response));
        drop(submitting);

        match result {
            Ok(item) => {
                info!(id = %item.id, "added todo");
                self.items.insert(0, item);
                self.draft.clear();
                self.refresh();
                Ok(Outcome::Applied)
            }
            Err(err) => Err(self.fail(Operation::Add, err)),
        }
    }

    /// Ask the server to set `completed` on `id` and cache its answer.
    pub async fn toggle(&mut self, id: &str, completed: bool) -> Result<Outcome, SyncError> {
        let request = match self.api.build_update_todo(id, &UpdateTodo { completed }) {
            Ok(request) => request,
            Err(err) => return Err(self.fail(Operation::Toggle, err)),
        };
        let result = self
            .round_trip(request)
            .await
            .and_then(|response| self.api.parse_update_todo(response));

        match result {
            Ok(item) => {
                match self.items.iter_mut().find(|cached| cached.id == id) {
                    Some(slot) => *slot = item,
                    None => debug!(%id, "updated todo is not cached"),
                }
                self.refresh();
                Ok(Outcome::Applied)
            }
            // `fail` redraws from the untouched cache, which also discards
            // any toggle state the surface showed ahead of the response.
            Err(err) => Err(self.fail(Operation::Toggle, err)),
        }
    }

    /// Delete `id` after the surface confirms it.
    pub async fn remove(&mut self, id: &str) -> Result<Outcome, SyncError> {
        if !self.surface.confirm(DELETE_PROMPT) {
            debug!(%id, "delete declined");
            return Ok(Outcome::Skipped);
        }

        let request = self.api.build_delete_todo(id);
        let result = self
            .round_trip(request)
            .await
            .and_then(|response| self.api.parse_delete_todo(response));

        match result {
            Ok(()) => {
                info!(%id, "deleted todo");
                self.items.retain(|cached| cached.id != id);
                self.refresh();
                Ok(Outcome::Applied)
            }
            Err(err) => Err(self.fail(Operation::Remove, err)),
        }
    }

    /// Send one request with the loading indicator raised.
    ///
    /// The previous banner is cleared before sending. The indicator guard
    /// lives only for the await, so callers see it lowered again whatever the
    /// result.
    async fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.error = None;
        self.focus_input = false;
        let _loading = self.loading.begin();
        self.refresh();

        debug!(method = %request.method, path = %request.path, "sending request");
        self.transport.execute(request).await
    }

    fn fail(&mut self, operation: Operation, source: ApiError) -> SyncError {
        warn!(%operation, error = %source, "request failed");
        self.error = Some(operation.failure_message().to_string());
        self.refresh();
        SyncError { operation, source }
    }
}
