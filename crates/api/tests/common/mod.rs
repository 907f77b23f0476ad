#![allow(dead_code)]

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderName, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use saved_items_api::config::{LogFormat, ServerConfig};
use saved_items_api::router::build_app_router;
use saved_items_api::state::AppState;
use saved_items_core::types::UserId;
use saved_items_db::models::saved_item::SavedItem;
use saved_items_db::repositories::SavedItemsRepo;
use saved_items_db::RepoError;
use tower::ServiceExt;

/// Error text the failing repository reports. Must never reach a response body.
pub const SECRET_FAILURE: &str = "connection to db-primary.internal:5432 refused";

/// Path of the saved-items resource.
pub const USER_PATH: &str = "/svc/saved-items/user";

/// Build a test `ServerConfig` with safe defaults and the `USER_ID` header.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        identity_header: HeaderName::from_static("user_id"),
        log_format: LogFormat::Text,
        run_migrations: false,
    }
}

/// Build the full application router around the given repository.
pub fn build_test_app(repo: Arc<dyn SavedItemsRepo>) -> Router {
    build_test_app_with_config(repo, test_config())
}

/// Build the full application router with a caller-supplied configuration.
pub fn build_test_app_with_config(
    repo: Arc<dyn SavedItemsRepo>,
    config: ServerConfig,
) -> Router {
    build_app_router(AppState::new(repo, config))
}

// ---------------------------------------------------------------------------
// Repository doubles
// ---------------------------------------------------------------------------

/// In-process repository that also records which identity each call used.
#[derive(Default)]
pub struct InMemoryRepo {
    items: Mutex<HashMap<UserId, Vec<SavedItem>>>,
    calls: Mutex<Vec<(&'static str, UserId)>>,
}

impl InMemoryRepo {
    pub fn seeded(user_id: u64, items: Vec<SavedItem>) -> Self {
        let repo = Self::default();
        repo.items.lock().unwrap().insert(user(user_id), items);
        repo
    }

    pub fn calls(&self) -> Vec<(&'static str, UserId)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, user_id: u64) -> Option<Vec<SavedItem>> {
        self.items.lock().unwrap().get(&user(user_id)).cloned()
    }

    fn record(&self, op: &'static str, user_id: UserId) {
        self.calls.lock().unwrap().push((op, user_id));
    }
}

#[async_trait]
impl SavedItemsRepo for InMemoryRepo {
    async fn get(&self, user_id: UserId) -> Result<Vec<SavedItem>, RepoError> {
        self.record("get", user_id);
        Ok(self
            .items
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn put(&self, user_id: UserId, items: &[SavedItem]) -> Result<(), RepoError> {
        self.record("put", user_id);
        self.items.lock().unwrap().insert(user_id, items.to_vec());
        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> Result<(), RepoError> {
        self.record("delete", user_id);
        self.items.lock().unwrap().remove(&user_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

/// Repository whose every operation fails with [`SECRET_FAILURE`].
pub struct FailingRepo;

fn secret_failure() -> RepoError {
    RepoError::Database(sqlx::Error::Protocol(SECRET_FAILURE.to_string()))
}

#[async_trait]
impl SavedItemsRepo for FailingRepo {
    async fn get(&self, _user_id: UserId) -> Result<Vec<SavedItem>, RepoError> {
        Err(secret_failure())
    }

    async fn put(&self, _user_id: UserId, _items: &[SavedItem]) -> Result<(), RepoError> {
        Err(secret_failure())
    }

    async fn delete(&self, _user_id: UserId) -> Result<(), RepoError> {
        Err(secret_failure())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Err(secret_failure())
    }
}

/// Repository that panics inside every operation.
pub struct PanickingRepo;

#[async_trait]
impl SavedItemsRepo for PanickingRepo {
    async fn get(&self, _user_id: UserId) -> Result<Vec<SavedItem>, RepoError> {
        panic!("{SECRET_FAILURE}")
    }

    async fn put(&self, _user_id: UserId, _items: &[SavedItem]) -> Result<(), RepoError> {
        panic!("{SECRET_FAILURE}")
    }

    async fn delete(&self, _user_id: UserId) -> Result<(), RepoError> {
        panic!("{SECRET_FAILURE}")
    }

    async fn ping(&self) -> Result<(), RepoError> {
        panic!("{SECRET_FAILURE}")
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub fn user(raw: u64) -> UserId {
    UserId::new(raw).unwrap()
}

/// Send a request to the app. `user_id` is the raw `USER_ID` header value.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user_id {
        builder = builder.header("USER_ID", id);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with no identity header.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

/// Collect the response body into bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
