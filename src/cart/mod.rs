//! Cart

pub mod errors;
pub mod models;
pub mod service;

pub use errors::CartServiceError;
pub use models::{Cart, CartItem, Product};
pub use service::*;
