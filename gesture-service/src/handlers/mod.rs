//! HTTP handlers for gesture-service.

pub mod documents;
pub mod gestures;
pub mod health;
pub mod suggestions;
pub mod voices;

pub use gestures::{create_gesture, list_gestures};
pub use health::{health_check, index, metrics_endpoint, readiness_check};
pub use suggestions::get_suggestions;
pub use voices::{create_voice, list_voices};
