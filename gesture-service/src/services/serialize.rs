//! Stored record to transport-safe record.

use chrono::SecondsFormat;
use mongodb::bson::{Bson, DateTime as BsonDateTime, Document};

/// Field MongoDB uses for the store-assigned identifier.
pub const NATIVE_ID_FIELD: &str = "_id";
/// Field clients see the identifier under.
pub const ID_FIELD: &str = "id";

/// Textual form of an identifier: hex for ObjectIds, the raw text for strings.
pub fn identifier_text(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T09:30:00.125Z`.
pub fn iso8601(dt: BsonDateTime) -> String {
    dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Replace `_id` with a string `id` and render top-level dates as ISO-8601.
///
/// Everything else passes through. Applying it to its own output is a no-op.
pub fn serialize_document(record: Document) -> Document {
    let mut out = Document::new();
    let has_native_id = match record.get(NATIVE_ID_FIELD) {
        Some(id) => {
            out.insert(ID_FIELD, identifier_text(id));
            true
        }
        None => false,
    };

    for (key, value) in record {
        if key == NATIVE_ID_FIELD || (has_native_id && key == ID_FIELD) {
            continue;
        }
        let value = match value {
            Bson::DateTime(dt) => Bson::String(iso8601(dt)),
            other => other,
        };
        out.insert(key, value);
    }

    out
}

/// Serialize a record and render it as plain JSON (relaxed extended JSON).
pub fn to_json(record: Document) -> serde_json::Value {
    Bson::Document(serialize_document(record)).into_relaxed_extjson()
}
