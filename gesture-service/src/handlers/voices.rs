use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use service_core::extract::ValidatedJson;

use super::documents::{create_record, list_records, CreatedResponse, ListParams};
use crate::models::{CreateVoiceCommandRequest, VoiceCommand};
use crate::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn create_voice(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVoiceCommandRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    create_record(state.store.as_ref(), request).await
}

#[tracing::instrument(skip(state, query))]
pub async fn list_voices(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let Query(params) = query?;
    list_records::<VoiceCommand>(state.store.as_ref(), params.limit()).await
}
