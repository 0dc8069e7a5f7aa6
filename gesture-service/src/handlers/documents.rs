//! Create/list pipeline shared by every entity endpoint:
//! validated payload -> store write, or store read -> serialized records.

use axum::{http::StatusCode, Json};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use crate::models::{Entity, NewRecord};
use crate::services::{record_document_created, record_storage_error, to_json, DocumentStore};

pub const DEFAULT_LIST_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
}

impl ListParams {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub ok: bool,
}

/// Normalize a validated payload and persist it in its entity's collection.
pub async fn create_record<P: NewRecord>(
    store: &dyn DocumentStore,
    payload: P,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let collection = <P::Record as Entity>::COLLECTION;
    let record = bson::to_document(&payload.into_record())?;

    let id = store
        .create_document(collection, record)
        .await
        .inspect_err(|e| {
            record_storage_error(collection, "create");
            tracing::error!(collection = %collection, error = %e, "Failed to create document");
        })?;

    record_document_created(collection);
    tracing::info!(collection = %collection, id = %id, "Document created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id, ok: true })))
}

/// Most recent records of `E`, serialized for transport.
pub async fn list_records<E: Entity>(
    store: &dyn DocumentStore,
    limit: u32,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let collection = E::COLLECTION;
    let records = store
        .get_documents(collection, limit)
        .await
        .inspect_err(|e| {
            record_storage_error(collection, "list");
            tracing::error!(collection = %collection, error = %e, "Failed to list documents");
        })?;

    Ok(Json(records.into_iter().map(to_json).collect()))
}
