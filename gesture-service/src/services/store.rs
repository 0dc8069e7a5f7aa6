//! Document store seam.
//!
//! Handlers only see [`DocumentStore`]; the MongoDB adapter backs production
//! and [`MemoryStore`](super::MemoryStore) backs tests and local runs.

use async_trait::async_trait;
use mongodb::bson::{DateTime as BsonDateTime, Document};
use service_core::error::AppError;

pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `record` in `collection` and return its new identifier.
    ///
    /// Fails with [`AppError::DatabaseError`] when the store is unreachable or
    /// rejects the write. Never retried.
    async fn create_document(&self, collection: &str, record: Document)
        -> Result<String, AppError>;

    /// Up to `limit` records of `collection`, most recently created first.
    ///
    /// A collection that does not exist yet yields an empty list.
    async fn get_documents(&self, collection: &str, limit: u32)
        -> Result<Vec<Document>, AppError>;

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Stamp creation and update times on a record about to be inserted.
pub fn stamp_timestamps(record: &mut Document, now: BsonDateTime) {
    record.insert(CREATED_AT_FIELD, now);
    record.insert(UPDATED_AT_FIELD, now);
}
