//! Cart service.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    cart::{
        errors::CartServiceError,
        models::{Cart, CartItem, Product},
    },
    storage::{CartStorage, DEFAULT_CART_KEY},
};

/// The consumer-facing cart contract.
///
/// Consumers receive a cloned handle to a running service instead of looking
/// the cart up in ambient context, so "no cart available" is a missing
/// argument at the call site rather than a runtime fault.
#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Snapshot of the current cart entries, in insertion order.
    fn products(&self) -> Vec<CartItem>;

    /// Adds a product to the cart: an existing entry with the same
    /// identifier gains quantity 1, otherwise the product is appended with
    /// quantity 1.
    async fn add_to_cart(&self, product: Product) -> Result<(), CartServiceError>;

    /// Increases the quantity of the entry matching `id` by 1. Unknown
    /// identifiers are a no-op.
    async fn increment(&self, id: &str) -> Result<(), CartServiceError>;

    /// Decreases the quantity of the entry matching `id` by 1, removing the
    /// entry once its quantity reaches 0. Unknown identifiers are a no-op.
    async fn decrement(&self, id: &str) -> Result<(), CartServiceError>;
}

/// A cart service backed by a key-value storage adapter.
///
/// Holds the authoritative in-memory cart and mirrors every mutation to
/// storage under a fixed key. The in-memory update is visible to every
/// holder of the handle as soon as a mutation applies; the storage write is
/// awaited so its failure reaches the caller instead of being dropped.
#[derive(Debug)]
pub struct StoredCartService<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for StoredCartService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct Inner<S> {
    storage: S,
    key: String,
    cart: RwLock<Cart>,
    // Serializes mutate-then-persist sequences across cloned handles so the
    // last applied mutation is also the last write the store observes.
    write_gate: Mutex<()>,
}

impl<S: CartStorage> StoredCartService<S> {
    /// Loads the persisted cart from `storage` under [`DEFAULT_CART_KEY`].
    ///
    /// # Errors
    ///
    /// Returns a `CartServiceError` if the read fails or the stored value is
    /// malformed.
    pub async fn load(storage: S) -> Result<Self, CartServiceError> {
        Self::load_with_key(storage, DEFAULT_CART_KEY).await
    }

    /// Loads the persisted cart from `storage` under `key`. A missing value
    /// initializes an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartServiceError` if the read fails or the stored value is
    /// malformed.
    pub async fn load_with_key(
        storage: S,
        key: impl Into<String>,
    ) -> Result<Self, CartServiceError> {
        let key = key.into();

        let cart = match storage.get(&key).await? {
            Some(value) => {
                serde_json::from_str(&value).map_err(CartServiceError::Deserialize)?
            }
            None => Cart::new(),
        };

        info!(key = %key, entries = cart.len(), "loaded cart");

        Ok(Self {
            inner: Arc::new(Inner {
                storage,
                key,
                cart: RwLock::new(cart),
                write_gate: Mutex::new(()),
            }),
        })
    }

    /// Snapshot of the current cart value.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies a pure cart transformation and mirrors the result to storage.
    ///
    /// The lock on the in-memory cart is released before the write is
    /// awaited; the write gate keeps concurrent mutations in a single
    /// apply-then-persist order.
    async fn apply<F>(&self, transform: F) -> Result<Cart, CartServiceError>
    where
        F: FnOnce(&Cart) -> Cart,
    {
        let _gate = self.inner.write_gate.lock().await;

        let updated = {
            let mut cart = self
                .inner
                .cart
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let updated = transform(&cart);
            *cart = updated.clone();

            updated
        };

        let encoded = serde_json::to_string(&updated).map_err(CartServiceError::Serialize)?;

        self.inner.storage.set(&self.inner.key, &encoded).await?;

        Ok(updated)
    }
}

#[async_trait]
impl<S: CartStorage> CartService for StoredCartService<S> {
    fn products(&self) -> Vec<CartItem> {
        self.inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items()
            .to_vec()
    }

    #[tracing::instrument(
        name = "cart.service.add_to_cart",
        skip(self, product),
        fields(product_id = %product.id),
        err
    )]
    async fn add_to_cart(&self, product: Product) -> Result<(), CartServiceError> {
        let id = product.id.clone();

        let updated = self.apply(|cart| cart.add(product)).await?;

        info!(product_id = %id, entries = updated.len(), "added product to cart");

        Ok(())
    }

    #[tracing::instrument(name = "cart.service.increment", skip(self), fields(product_id = %id), err)]
    async fn increment(&self, id: &str) -> Result<(), CartServiceError> {
        let updated = self.apply(|cart| cart.increment(id)).await?;

        info!(product_id = %id, entries = updated.len(), "incremented cart entry");

        Ok(())
    }

    #[tracing::instrument(name = "cart.service.decrement", skip(self), fields(product_id = %id), err)]
    async fn decrement(&self, id: &str) -> Result<(), CartServiceError> {
        let updated = self.apply(|cart| cart.decrement(id)).await?;

        info!(product_id = %id, entries = updated.len(), "decremented cart entry");

        Ok(())
    }
}
