//! Storage
//!
//! The opaque asynchronous key-value store the cart is mirrored into. The
//! cart is always written whole: one string-encoded value under one key, no
//! partial updates and no stored-schema versioning.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key the serialized cart list is stored under unless the service is given
/// another one.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Errors returned by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium failed to read or write.
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),
}

/// An asynchronous key-value store holding string-encoded values.
#[automock]
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Retrieves the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
