//! Schema definitions for the persisted entities.
//!
//! Each entity lives in its own collection named after the lowercase entity
//! name. Request payloads carry the validation rules; `into_record` applies
//! defaults and yields the stored shape.

pub mod gesture;
pub mod voice_command;
pub mod workflow;

pub use gesture::{CreateGestureRequest, Gesture};
pub use voice_command::{CreateVoiceCommandRequest, VoiceCommand};
pub use workflow::{CreateWorkflowRequest, Workflow};

use serde::{de::DeserializeOwned, Serialize};
use service_core::extract::FieldKinds;
use validator::Validate;

/// Open-ended key/value payload. Contents are never inspected.
pub type OpenMap = serde_json::Map<String, serde_json::Value>;

/// A persisted entity type.
pub trait Entity: Serialize + Send + Sync {
    /// Name of the collection holding records of this type.
    const COLLECTION: &'static str;
}

/// An unvalidated create payload for an [`Entity`].
///
/// [`FieldKinds`] must list every payload field so type mismatches are
/// reported next to rule violations.
pub trait NewRecord: DeserializeOwned + Validate + FieldKinds + Send {
    type Record: Entity;

    /// Normalize a payload that already passed [`Validate::validate`].
    fn into_record(self) -> Self::Record;
}
