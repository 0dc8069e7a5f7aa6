use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::{recent_suggestions, Suggestion};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Never fails: storage problems degrade to the static suggestions.
#[tracing::instrument(skip(state))]
pub async fn get_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: recent_suggestions(state.store.as_ref()).await,
    })
}
