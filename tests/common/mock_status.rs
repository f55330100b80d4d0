//! Mock status server for poller tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for `GET /s`.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn host(host: &str, os: &str) -> Self {
        Self {
            status: 200,
            body: format!(
                r#"{{"host":"{host}","lines":[{{"key":"OS","value":"{os}"}}]}}"#
            ),
            delay_ms: 0,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"unavailable"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    hits: Arc<Mutex<usize>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    fallback: Arc<Mutex<MockResponse>>,
}

pub struct MockStatusServer {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStatusServer {
    /// Starts a server answering `fallback` once the queue is empty.
    pub async fn start(fallback: MockResponse) -> Self {
        let state = MockState {
            hits: Arc::new(Mutex::new(0)),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(fallback)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        let app = Router::new()
            .route("/s", get(handle_status))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn set_fallback(&self, response: MockResponse) {
        *self.state.fallback.lock().await = response;
    }

    pub async fn hits(&self) -> usize {
        *self.state.hits.lock().await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn status_url(&self) -> String {
        format!("http://{}/s", self.addr)
    }
}

impl Drop for MockStatusServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_status(State(state): State<MockState>) -> Response {
    *state.hits.lock().await += 1;

    let next = state.responses.lock().await.pop_front();
    let response = match next {
        Some(response) => response,
        None => state.fallback.lock().await.clone(),
    };

    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap();
    (status, [("content-type", "application/json")], response.body).into_response()
}
