//! Cart Models

use serde::{Deserialize, Serialize};

/// Product Model
///
/// A product descriptor as presented by a catalogue, without a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, unique within a cart.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Reference to the product image.
    pub image_url: String,

    /// Unit price in minor units.
    pub price: u64,
}

/// CartItem Model
///
/// A product reference augmented with a quantity. Stored flat so the
/// persisted value is a JSON array of five-field records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, unique within a cart.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Reference to the product image.
    pub image_url: String,

    /// Unit price in minor units.
    pub price: u64,

    /// Number of units in the cart, at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart entry for the given product with quantity 1.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

/// Cart
///
/// An ordered collection of cart items, keyed by product identifier.
/// Identifiers are unique and insertion order is preserved. Every mutation
/// is pure: it returns a new `Cart` and leaves the receiver untouched, so a
/// snapshot handed to a consumer can never change underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart from existing entries, e.g. when rehydrating from
    /// storage.
    #[must_use]
    pub fn with_items(items: impl Into<Vec<CartItem>>) -> Self {
        Cart {
            items: items.into(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// If an entry with the product's identifier already exists, its quantity
    /// grows by 1 in place; otherwise the product is appended with quantity 1.
    #[must_use]
    pub fn add(&self, product: Product) -> Self {
        if self.get(&product.id).is_some() {
            return self.increment(&product.id);
        }

        let mut items = self.items.clone();
        items.push(CartItem::new(product));

        Cart { items }
    }

    /// Increases the quantity of the entry matching `id` by 1.
    ///
    /// An unknown identifier yields an unchanged cart.
    #[must_use]
    pub fn increment(&self, id: &str) -> Self {
        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id {
                    item.quantity += 1;
                }

                item
            })
            .collect();

        Cart { items }
    }

    /// Decreases the quantity of the entry matching `id` by 1, removing the
    /// entry once its quantity reaches 0.
    ///
    /// An unknown identifier yields an unchanged cart.
    #[must_use]
    pub fn decrement(&self, id: &str) -> Self {
        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id {
                    item.quantity = item.quantity.saturating_sub(1);
                }

                item
            })
            .filter(|item| item.quantity > 0)
            .collect();

        Cart { items }
    }

    /// Get the entry matching `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The cart entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the entries in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Get the number of distinct entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
