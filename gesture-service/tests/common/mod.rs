#![allow(dead_code)]

use async_trait::async_trait;
use gesture_service::config::{
    CorsConfig, GestureConfig, MongoConfig, ObservabilityConfig, StoreBackend, StoreConfig,
};
use gesture_service::services::{DocumentStore, MemoryStore};
use gesture_service::startup::Application;
use mongodb::bson::Document;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config(mongo_uri: String) -> GestureConfig {
    GestureConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        store: StoreConfig {
            backend: StoreBackend::Mongodb,
        },
        mongodb: MongoConfig {
            uri: mongo_uri,
            database: format!("gesture_test_{}", uuid::Uuid::new_v4().simple()),
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        observability: ObservabilityConfig {
            log_level: "warn".to_string(),
            otlp_endpoint: None,
        },
    }
}

impl TestApp {
    /// Spawn the service over a fresh in-memory store.
    pub async fn spawn() -> (Self, MemoryStore) {
        let store = MemoryStore::new();
        let app = Self::spawn_with(Arc::new(store.clone())).await;
        (app, store)
    }

    pub async fn spawn_with(store: Arc<dyn DocumentStore>) -> Self {
        let config = test_config("mongodb://unused".to_string());
        let app = Application::with_store(config, store)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the service against a real MongoDB (`TEST_MONGODB_URI`).
    pub async fn spawn_mongo() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        Self::spawn_built(test_config(uri)).await
    }

    /// Spawn the service through `Application::build` with `config`.
    pub async fn spawn_built(config: GestureConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling the root endpoint
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        self.get(path)
            .await
            .json()
            .await
            .expect("Failed to parse response")
    }
}

/// Store whose every operation fails like an unreachable database.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> AppError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        AppError::DatabaseError(anyhow::anyhow!("connection refused"))
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(
        &self,
        _collection: &str,
        _record: Document,
    ) -> Result<String, AppError> {
        Err(self.fail())
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _limit: u32,
    ) -> Result<Vec<Document>, AppError> {
        Err(self.fail())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(self.fail())
    }
}
