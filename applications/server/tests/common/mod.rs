/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use deckhand_server::{create_router, state::AppState};
use deckhand_storage::Database;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a file-based SQLite database in a temp directory
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let db = Arc::new(Database::connect(&db_url).await.unwrap());
        let router = create_router(AppState::new(Arc::clone(&db)));

        Self {
            router,
            db,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        split(response).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .uri(uri)
            .method(method)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap();
        self.send(request).await
    }
}

async fn split(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, json)
}

/// Request fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn ash() -> Value {
        json!({
            "username": "ash",
            "decks": [
                {"name": "Fire", "image": "fire.png", "wins": "3", "losses": "1"}
            ]
        })
    }

    pub fn misty() -> Value {
        json!({
            "username": "misty",
            "decks": [
                {"name": "Water", "image": "water.png", "wins": "7", "losses": "2"},
                {"name": "Ice", "image": "ice.png", "wins": "0", "losses": "4"}
            ]
        })
    }
}
