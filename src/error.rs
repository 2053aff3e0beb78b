//! Error type for persistence operations.
//!
//! The taxonomy is deliberately small: only (de)serialization can fail.
//! A missing storage entry is the absent sentinel, not an error, and a
//! duplicate item id is a warning, not a failure.

use thiserror::Error;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The post-reduce state could not be serialized for storage.
    #[error("failed to serialize state for item `{item_id}`: {source}")]
    Serialize {
        item_id: String,
        source: serde_json::Error,
    },

    /// A persisted snapshot could not be deserialized during hydration.
    #[error("failed to deserialize persisted state for item `{item_id}`: {source}")]
    Deserialize {
        item_id: String,
        source: serde_json::Error,
    },
}
