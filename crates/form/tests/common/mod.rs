#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::sync::Semaphore;

use listing_client::api::SubmissionClient;
use listing_client::outcome::{CreatedProperty, FailureReason, SubmissionOutcome};
use listing_core::draft::PropertyDraft;

pub fn success() -> SubmissionOutcome {
    SubmissionOutcome::Success(CreatedProperty::empty())
}

pub fn server_error() -> SubmissionOutcome {
    SubmissionOutcome::Failure(FailureReason::Status {
        status: 500,
        body: "boom".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Fake clients
// ---------------------------------------------------------------------------

/// Answers requests from a script, then with success once it runs out.
pub struct ScriptedClient {
    script: Mutex<VecDeque<SubmissionOutcome>>,
    seen: Mutex<Vec<PropertyDraft>>,
}

impl ScriptedClient {
    pub fn new(script: Vec<SubmissionOutcome>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<PropertyDraft> {
        self.seen.lock().unwrap().clone()
    }
}

impl SubmissionClient for ScriptedClient {
    async fn create_property(&self, draft: PropertyDraft) -> SubmissionOutcome {
        self.seen.lock().unwrap().push(draft);
        self.script.lock().unwrap().pop_front().unwrap_or_else(success)
    }
}

/// Holds every request until the test releases it.
pub struct GatedClient {
    outcome: SubmissionOutcome,
    gate: Semaphore,
    seen: Mutex<Vec<PropertyDraft>>,
}

impl GatedClient {
    pub fn new(outcome: SubmissionOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            gate: Semaphore::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Let `n` held requests complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn requests(&self) -> Vec<PropertyDraft> {
        self.seen.lock().unwrap().clone()
    }

    /// Wait until at least `n` requests have arrived.
    pub async fn wait_for_requests(&self, n: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.seen.lock().unwrap().len() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("requests should arrive");
    }
}

impl SubmissionClient for GatedClient {
    async fn create_property(&self, draft: PropertyDraft) -> SubmissionOutcome {
        self.seen.lock().unwrap().push(draft);
        self.gate.acquire().await.unwrap().forget();
        self.outcome.clone()
    }
}

// ---------------------------------------------------------------------------
// Stub listings service
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<(Option<String>, Bytes)>>>,
}

pub struct StubService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<(Option<String>, Bytes)>>>,
}

impl StubService {
    /// `(content-type, parsed JSON body)` of every request received.
    pub fn requests(&self) -> Vec<(Option<String>, serde_json::Value)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(ct, body)| (ct.clone(), serde_json::from_slice(body).unwrap()))
            .collect()
    }
}

async fn create(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push((content_type, body));
    (state.status, state.body)
}

/// Start a stub `POST /properties` that always answers `status` + `body`.
pub async fn spawn_stub(status: StatusCode, body: &'static str) -> StubService {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/properties", post(create))
        .with_state(StubState {
            status,
            body,
            requests: Arc::clone(&requests),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// A base URL on which nothing is listening.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
