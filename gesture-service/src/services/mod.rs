pub mod database;
pub mod memory;
pub mod metrics;
pub mod serialize;
pub mod store;
pub mod suggestions;

pub use database::MongoDb;
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics, record_document_created, record_storage_error};
pub use serialize::{serialize_document, to_json};
pub use store::DocumentStore;
pub use suggestions::{build_suggestions, fallback_suggestions, recent_suggestions, Suggestion};
