#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use drama_api::config::ServerConfig;
use drama_api::router::build_app_router;
use drama_api::state::AppState;
use drama_db::repositories::DramaRepo;
use drama_db::store::{FileStore, MemoryStore};
use drama_db::{DbPool, StorageConfig, StorageMode};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin, a 30-second request timeout
/// and strict create validation.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            mode: StorageMode::Memory,
            data_file: "unused.json".into(),
        },
        strict_validation: true,
    }
}

/// Build the full application router over `pool` with the given config.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_app_with(pool: DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        repo: Arc::new(DramaRepo::new(pool)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// App backed by a memory store seeded with the five-record sample catalog.
pub fn memory_app() -> Router {
    build_app_with(Arc::new(MemoryStore::seeded()), test_config())
}

/// App backed by a JSON file at `path` (seeded with the default catalog if absent).
pub async fn file_app(path: &Path) -> Router {
    let config = ServerConfig {
        storage: StorageConfig {
            mode: StorageMode::File,
            data_file: path.to_path_buf(),
        },
        ..test_config()
    };
    build_app_with(Arc::new(FileStore::open(path).await), config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
