use serde::{Deserialize, Serialize};
use service_core::extract::{FieldKinds, JsonKind};
use validator::Validate;

use super::{Entity, NewRecord, OpenMap};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Custom voice phrase mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceCommand {
    /// Trigger utterance.
    pub phrase: String,
    pub intent: String,
    /// ISO language code.
    pub language: String,
    pub app: Option<String>,
    #[serde(default)]
    pub context: OpenMap,
}

impl Entity for VoiceCommand {
    const COLLECTION: &'static str = "voicecommand";
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVoiceCommandRequest {
    #[validate(
        required(message = "phrase is required"),
        length(min = 1, message = "phrase cannot be empty")
    )]
    pub phrase: Option<String>,
    #[validate(
        required(message = "intent is required"),
        length(min = 1, message = "intent cannot be empty")
    )]
    pub intent: Option<String>,
    pub language: Option<String>,
    pub app: Option<String>,
    pub context: Option<OpenMap>,
}

impl FieldKinds for CreateVoiceCommandRequest {
    const FIELDS: &'static [(&'static str, JsonKind)] = &[
        ("phrase", JsonKind::String),
        ("intent", JsonKind::String),
        ("language", JsonKind::String),
        ("app", JsonKind::String),
        ("context", JsonKind::Object),
    ];
}

impl NewRecord for CreateVoiceCommandRequest {
    type Record = VoiceCommand;

    fn into_record(self) -> VoiceCommand {
        VoiceCommand {
            phrase: self.phrase.unwrap_or_default(),
            intent: self.intent.unwrap_or_default(),
            language: self
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            app: self.app,
            context: self.context.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use service_core::error::field_errors;

    #[test]
    fn language_defaults_to_english() {
        let request: CreateVoiceCommandRequest =
            serde_json::from_value(json!({"phrase": "open notes", "intent": "open_notes"}))
                .unwrap();
        assert!(request.validate().is_ok());

        let command = request.into_record();
        assert_eq!(command.language, "en");
        assert!(command.context.is_empty());
        assert_eq!(command.app, None);
    }

    #[test]
    fn keeps_explicit_language_and_context() {
        let request: CreateVoiceCommandRequest = serde_json::from_value(json!({
            "phrase": "ouvre les notes",
            "intent": "open_notes",
            "language": "fr",
            "app": "notes",
            "context": {"room": "office"}
        }))
        .unwrap();

        let command = request.into_record();
        assert_eq!(command.language, "fr");
        assert_eq!(command.app.as_deref(), Some("notes"));
        assert_eq!(command.context["room"], "office");
    }

    #[test]
    fn reports_missing_phrase_and_intent() {
        let request: CreateVoiceCommandRequest =
            serde_json::from_value(json!({"language": "en"})).unwrap();
        let fields = field_errors(&request.validate().unwrap_err());

        assert!(fields.contains_key("phrase"));
        assert!(fields.contains_key("intent"));
    }
}
