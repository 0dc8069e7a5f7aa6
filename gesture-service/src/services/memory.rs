use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime, Document};
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::store::{stamp_timestamps, DocumentStore};

/// Process-local store with the same contract as MongoDB: `_id` is an
/// `ObjectId`, records are stamped, reads are newest first.
///
/// Selected at startup with `STORE_BACKEND=memory`.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, AppError> {
        let id = ObjectId::new();
        record.insert("_id", id);
        stamp_timestamps(&mut record, BsonDateTime::now());

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: u32,
    ) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .rev()
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
