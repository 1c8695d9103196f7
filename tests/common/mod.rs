#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bson::Document;
use serde_json::Value;
use tokio::net::TcpListener;

use voxara_nbfc_backend::auth::ApiKey;
use voxara_nbfc_backend::config::AppConfig;
use voxara_nbfc_backend::database::{
    Collection, DatabaseError, DocumentStore, FindQuery, MemoryStore,
};
use voxara_nbfc_backend::state::AppState;

pub const API_KEY: &str = "test-shared-secret";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Driver text a `FailingStore` reports; must never reach a client
pub const DRIVER_FAILURE: &str =
    "server selection timeout, hosts: secret-cluster.mongodb.net:27017";

pub struct TestServer<S = MemoryStore> {
    pub port: u16,
    pub base_url: String,
    pub store: Arc<S>,
    pub client: reqwest::Client,
}

impl TestServer<MemoryStore> {
    /// Start the full router on a free port, backed by a fresh in-memory store.
    ///
    /// Each test gets its own server because `#[tokio::test]` gives each test
    /// its own runtime; the server task ends with that runtime.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(MemoryStore::new(), &[]).await
    }
}

impl<S: DocumentStore + 'static> TestServer<S> {
    /// Start the router over `store`, with extra environment values layered
    /// on top of the test defaults
    pub async fn spawn_with(store: S, env: &[(&str, &str)]) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = AppConfig::from_lookup(|key| {
            if let Some((_, value)) = env.iter().find(|(k, _)| *k == key) {
                return Some(value.to_string());
            }
            match key {
                "MONGO_URI" => Some("mongodb://unused.invalid".to_string()),
                "API_KEY" => Some(API_KEY.to_string()),
                _ => None,
            }
        })?;

        let store = Arc::new(store);
        let state = AppState::new(store.clone(), ApiKey::new(&config.security.api_key));
        let app = voxara_nbfc_backend::app(state, &config);

        let listener = TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });

        Ok(Self {
            port,
            base_url,
            store,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated GET returning status and JSON body
    pub async fn get(&self, path: &str) -> Result<(reqwest::StatusCode, Value)> {
        let res = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, API_KEY)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }

    /// Authenticated JSON POST returning status and JSON body
    pub async fn post(&self, path: &str, body: &Value) -> Result<(reqwest::StatusCode, Value)> {
        let res = self
            .client
            .post(self.url(path))
            .header(API_KEY_HEADER, API_KEY)
            .json(body)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json::<Value>().await?))
    }
}

/// Store whose every operation fails the way an unreachable cluster does
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_one(&self, _: Collection, _: Document) -> Result<String, DatabaseError> {
        Err(DatabaseError::Unavailable(DRIVER_FAILURE.to_string()))
    }

    async fn find(&self, _: Collection, _: FindQuery) -> Result<Vec<Document>, DatabaseError> {
        Err(DatabaseError::Unavailable(DRIVER_FAILURE.to_string()))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::Unavailable(DRIVER_FAILURE.to_string()))
    }
}

pub fn daily_update(employee_name: &str, has_query: &str, employee_query: Option<&str>) -> Value {
    serde_json::json!({
        "employee_name": employee_name,
        "visits_count": 5,
        "visit_summary": "Visited 5 clients",
        "has_query": has_query,
        "employee_query": employee_query,
        "tomorrow_goal": "Call 10 leads",
    })
}
