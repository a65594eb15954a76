//! Cart service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by cart service operations.
#[derive(Debug, Error)]
pub enum CartServiceError {
    /// The storage adapter failed to read or write the cart value.
    #[error("storage error")]
    Storage(#[from] StorageError),

    /// The in-memory cart could not be encoded for storage.
    #[error("failed to encode cart for storage")]
    Serialize(#[source] serde_json::Error),

    /// The stored value is not a valid encoded cart.
    #[error("malformed stored cart value")]
    Deserialize(#[source] serde_json::Error),
}
