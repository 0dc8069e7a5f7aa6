use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

use super::serialize::identifier_text;
use super::store::{stamp_timestamps, DocumentStore};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    /// Recent-first index for every collection the list endpoints read.
    pub async fn initialize_indexes(&self, collections: &[&str]) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for gesture-service");

        for name in collections {
            let created_index = IndexModel::builder()
                .keys(doc! { "created_at": -1, "_id": -1 })
                .options(
                    IndexOptions::builder()
                        .name("created_at_idx".to_string())
                        .build(),
                )
                .build();

            self.collection(name)
                .create_index(created_index, None)
                .await
                .map_err(|e| {
                    tracing::error!(collection = %name, "Failed to create created_at index: {}", e);
                    AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
                })?;
        }

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, AppError> {
        stamp_timestamps(&mut record, BsonDateTime::now());

        let result = self
            .collection(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(identifier_text(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<Document>, AppError> {
        // MongoDB reads a zero limit as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }

        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1, "_id": -1 })
            .limit(i64::from(limit))
            .build();

        let cursor = self
            .collection(collection)
            .find(None, find_options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to list documents: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }
}
