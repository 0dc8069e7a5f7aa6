use serde::{Deserialize, Serialize};
use service_core::extract::{FieldKinds, JsonKind};
use validator::Validate;

use super::{Entity, NewRecord, OpenMap};

pub const DEFAULT_SENSITIVITY: f64 = 0.7;

/// Custom hand gesture definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gesture {
    pub name: String,
    /// Action identifier, e.g. `next_slide`.
    pub intent: String,
    pub app: Option<String>,
    pub sensitivity: f64,
    #[serde(default)]
    pub metadata: OpenMap,
}

impl Entity for Gesture {
    const COLLECTION: &'static str = "gesture";
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGestureRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name cannot be empty")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "intent is required"),
        length(min = 1, message = "intent cannot be empty")
    )]
    pub intent: Option<String>,
    pub app: Option<String>,
    #[validate(range(min = 0.0, max = 1.0, message = "sensitivity must be between 0.0 and 1.0"))]
    pub sensitivity: Option<f64>,
    pub metadata: Option<OpenMap>,
}

impl FieldKinds for CreateGestureRequest {
    const FIELDS: &'static [(&'static str, JsonKind)] = &[
        ("name", JsonKind::String),
        ("intent", JsonKind::String),
        ("app", JsonKind::String),
        ("sensitivity", JsonKind::Number),
        ("metadata", JsonKind::Object),
    ];
}

impl NewRecord for CreateGestureRequest {
    type Record = Gesture;

    fn into_record(self) -> Gesture {
        Gesture {
            name: self.name.unwrap_or_default(),
            intent: self.intent.unwrap_or_default(),
            app: self.app,
            sensitivity: self.sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
            metadata: self.metadata.unwrap_or_default(),
        }
    }
}
