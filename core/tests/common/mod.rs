//! Scripted transport and recording surface shared by the app tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;

use todo_core::{ApiError, HttpRequest, HttpResponse, Surface, TodoApi, TodoApp, TodoItem, Transport, View};

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn push(&self, status: u16, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(status, body.to_string());
    }

    pub fn push_unreachable(&self) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".to_string())));
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("request sent with no scripted response")
    }
}

/// Keeps every frame it is asked to draw and answers confirmations from a
/// fixed setting.
pub struct RecordingSurface {
    pub frames: Vec<View>,
    pub prompts: Vec<String>,
    pub accept: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            prompts: Vec::new(),
            accept: true,
        }
    }
}

impl RecordingSurface {
    pub fn last(&self) -> &View {
        self.frames.last().expect("nothing rendered yet")
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, view: &View) {
        self.frames.push(view.clone());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.accept
    }
}

pub type TestApp = TodoApp<ScriptedTransport, RecordingSurface>;

pub fn new_app() -> TestApp {
    TodoApp::new(
        TodoApi::new(""),
        ScriptedTransport::default(),
        RecordingSurface::default(),
    )
}

pub fn item(id: &str, text: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

pub fn item_json(item: &TodoItem) -> serde_json::Value {
    serde_json::to_value(item).unwrap()
}

/// App whose cache was filled by a successful load of `items`.
pub fn loaded_app(items: &[TodoItem]) -> TestApp {
    let mut app = new_app();
    app.transport()
        .push_json(200, serde_json::to_value(items).unwrap());
    block_on(app.load()).unwrap();
    app
}

pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}
