//! Test fixtures: a throwaway axum backend that records what it was sent, and a
//! token store that counts how often it was cleared.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use store::{MemoryStore, StoreError, TokenStore};
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<Vec<Hit>>>);

impl Hits {
    pub fn all(&self) -> Vec<Hit> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

async fn record(State(hits): State<Hits>, request: Request, next: Next) -> Response {
    let hit = Hit {
        method: request.method().to_string(),
        path: request.uri().path().to_string(),
        authorization: request
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    hits.0.lock().unwrap().push(hit);
    next.run(request).await
}

/// Serve `router` on an ephemeral port. Returns the base URL and the hit log.
pub async fn serve(router: Router) -> (String, Hits) {
    let hits = Hits::default();
    let app = router.layer(middleware::from_fn_with_state(hits.clone(), record));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), hits)
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}

#[derive(Clone, Default)]
pub struct CountingStore {
    inner: MemoryStore,
    clears: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            inner: MemoryStore::with_token(token),
            clears: Arc::default(),
        }
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl TokenStore for CountingStore {
    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.inner.set_token(token)
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear_token()
    }
}
