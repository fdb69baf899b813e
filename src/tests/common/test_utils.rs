use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

/// Scripted stand-in for the scheduling service.
///
/// Each incoming request pops the next scripted (status, body) pair; the
/// last pair repeats once the script runs out. Requests and their bodies are
/// recorded so tests can assert on the wire contract and on how many calls
/// actually happened.
pub struct StubService {
    hits: AtomicUsize,
    responses: Mutex<VecDeque<(u16, String)>>,
    last_response: Mutex<(u16, String)>,
    request_bodies: Mutex<Vec<String>>,
}

impl StubService {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn request_bodies(&self) -> Vec<String> {
        self.request_bodies.lock().unwrap().clone()
    }
}

/// Spawn a stub scheduling service on an ephemeral port.
///
/// Returns the endpoint base URL to hand to the client and the shared stub
/// state for assertions.
pub async fn spawn_stub_service(script: Vec<(u16, String)>) -> (String, Arc<StubService>) {
    let last = script.last().cloned().unwrap_or((200, "{}".to_string()));
    let stub = Arc::new(StubService {
        hits: AtomicUsize::new(0),
        responses: Mutex::new(script.into_iter().collect()),
        last_response: Mutex::new(last),
        request_bodies: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/api/schedule/generate", post(generate_handler))
        .with_state(Arc::clone(&stub));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub service");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Stub service failed");
    });

    (format!("http://{}", addr), stub)
}

async fn generate_handler(State(stub): State<Arc<StubService>>, body: String) -> (StatusCode, String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.request_bodies.lock().unwrap().push(body);

    let (code, response_body) = stub
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| stub.last_response.lock().unwrap().clone());

    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        response_body,
    )
}
