//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoApp` through
//! every operation over real HTTP using ureq. Validates that request
//! building, response parsing, and cache synchronization work end-to-end
//! with the actual server.

mod common;

use common::{block_on, RecordingSurface};
use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Outcome, TodoApi, TodoApp, Transport};

/// Executes requests with ureq on the calling thread.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = spawn_server();
    let api = TodoApi::new(&format!("http://{addr}"));
    let mut app = TodoApp::new(api, UreqTransport::new(), RecordingSurface::default());

    // Step 1: load — should be empty.
    block_on(app.load()).unwrap();
    assert!(app.items().is_empty(), "expected empty list");
    assert!(app.surface().last().empty);

    // Step 2: add two todos; newest first.
    block_on(app.add("Buy milk")).unwrap();
    block_on(app.add("  Walk dog  ")).unwrap();
    let texts: Vec<&str> = app.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["Walk dog", "Buy milk"]);
    assert!(app.items().iter().all(|i| !i.completed));
    let milk = app.items()[1].id.clone();
    let dog = app.items()[0].id.clone();

    // Step 3: complete one.
    block_on(app.toggle(&milk, true)).unwrap();
    assert!(app.items()[1].completed);
    assert!(!app.items()[0].completed);
    let summary = app.surface().last().summary;
    assert_eq!((summary.total, summary.completed, summary.pending), (2, 1, 1));

    // Step 4: reload — server keeps insertion order, so the cache flips.
    block_on(app.load()).unwrap();
    let ids: Vec<&str> = app.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, [milk.as_str(), dog.as_str()]);

    // Step 5: delete.
    assert_eq!(block_on(app.remove(&milk)).unwrap(), Outcome::Applied);
    assert_eq!(app.items().len(), 1);
    assert_eq!(app.items()[0].id, dog);

    // Step 6: delete again — the server says 404 and the cache is untouched.
    let err = block_on(app.remove(&milk)).unwrap_err();
    assert!(matches!(err.source, ApiError::Http { status: 404, .. }));
    assert_eq!(app.items().len(), 1);
    assert_eq!(app.error(), Some("Failed to delete todo. Please try again."));

    // Step 7: toggle of a vanished id fails the same way.
    let err = block_on(app.toggle(&milk, false)).unwrap_err();
    assert!(matches!(err.source, ApiError::Http { status: 404, .. }));

    // Step 8: blank text never reaches the server.
    assert_eq!(block_on(app.add("   ")).unwrap(), Outcome::Skipped);
    block_on(app.load()).unwrap();
    assert_eq!(app.items().len(), 1);
    assert!(app.error().is_none());
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let api = TodoApi::new(&format!("http://{addr}"));
    let mut app = TodoApp::new(api, UreqTransport::new(), RecordingSurface::default());

    let err = block_on(app.load()).unwrap_err();

    assert!(matches!(err.source, ApiError::Transport(_)));
    assert_eq!(app.error(), Some("Failed to load todos. Please refresh the page."));
    assert!(!app.surface().last().loading);
}
