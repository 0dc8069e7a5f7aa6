//! Adaptive suggestions derived from the most recent gestures and voice
//! commands, with a fixed fallback when there is nothing to adapt to.

use mongodb::bson::{Bson, Document};
use serde::Serialize;

use super::metrics::record_suggestions_fallback;
use super::store::DocumentStore;
use crate::models::{Entity, Gesture, VoiceCommand};

/// Records read from each collection.
pub const RECENT_PER_COLLECTION: u32 = 3;
pub const MAX_SUGGESTIONS: usize = 6;

const DEFAULT_CATEGORY: &str = "Custom";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub category: String,
}

impl Suggestion {
    fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
        }
    }
}

pub fn fallback_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("Wave to silence notifications", "Focus"),
        Suggestion::new("Pinch to zoom in any app", "Navigation"),
        Suggestion::new("Say \"open notes\" to start typing", "Voice"),
    ]
}

/// Absent, null and empty values count as missing.
fn text_or(record: &Document, key: &str, default: &str) -> String {
    match record.get(key) {
        Some(Bson::String(s)) if !s.is_empty() => s.clone(),
        None | Some(Bson::Null) | Some(Bson::String(_)) => default.to_string(),
        Some(other) => other.to_string(),
    }
}

fn gesture_suggestion(g: &Document) -> Suggestion {
    Suggestion::new(
        format!(
            "Use '{}' to trigger {}",
            text_or(g, "name", "gesture"),
            text_or(g, "intent", "an action")
        ),
        text_or(g, "app", DEFAULT_CATEGORY),
    )
}

fn voice_suggestion(v: &Document) -> Suggestion {
    Suggestion::new(
        format!(
            "Say '{}' to {}",
            text_or(v, "phrase", "command"),
            text_or(v, "intent", "do something")
        ),
        text_or(v, "app", DEFAULT_CATEGORY),
    )
}

/// Gestures first, then voice commands, capped at [`MAX_SUGGESTIONS`].
/// Falls back to [`fallback_suggestions`] only when both inputs are empty.
pub fn build_suggestions(gestures: &[Document], voices: &[Document]) -> Vec<Suggestion> {
    let dynamic: Vec<Suggestion> = gestures
        .iter()
        .map(gesture_suggestion)
        .chain(voices.iter().map(voice_suggestion))
        .take(MAX_SUGGESTIONS)
        .collect();

    if dynamic.is_empty() {
        fallback_suggestions()
    } else {
        dynamic
    }
}

/// Read recent records and derive suggestions. Storage failures degrade to
/// the fallback list instead of failing.
pub async fn recent_suggestions(store: &dyn DocumentStore) -> Vec<Suggestion> {
    let recent = async {
        let gestures = store
            .get_documents(Gesture::COLLECTION, RECENT_PER_COLLECTION)
            .await?;
        let voices = store
            .get_documents(VoiceCommand::COLLECTION, RECENT_PER_COLLECTION)
            .await?;
        Ok::<_, service_core::error::AppError>((gestures, voices))
    }
    .await;

    let (gestures, voices) = match recent {
        Ok(recent) => recent,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read recent records, serving fallback suggestions");
            (Vec::new(), Vec::new())
        }
    };

    let suggestions = build_suggestions(&gestures, &voices);
    if gestures.is_empty() && voices.is_empty() {
        record_suggestions_fallback();
    }
    suggestions
}
