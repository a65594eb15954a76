//! Trolley
//!
//! Trolley is an embeddable shopping-cart state container with pluggable
//! asynchronous key-value persistence. The in-memory cart is the single
//! source of truth for consumers; every mutation is mirrored to storage as
//! one JSON value under a fixed key so the cart survives process restarts.

pub mod cart;
pub mod storage;

pub use cart::{Cart, CartItem, CartService, CartServiceError, Product, StoredCartService};
pub use storage::{CartStorage, DEFAULT_CART_KEY, FileStorage, MemoryStorage, StorageError};
