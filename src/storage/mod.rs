//! Durable storage for the cart snapshot.
//!
//! The cart is persisted whole after every successful mutation and read back
//! once at startup: a single string-keyed record inside a small key-value
//! document, the moral equivalent of the browser storage the original
//! storefront leaned on. [`JsonFileStore`] is the production implementation;
//! an in-memory double lives in [`crate::mock`].

pub mod file;

pub use file::JsonFileStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::CartItem;

/// Fixed record key the cart snapshot lives under.
pub const CART_KEY: &str = "shopcart:cart";

/// Failures from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing document failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document or the snapshot record did not parse.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The storage backend could not be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value home of the cart snapshot.
///
/// `save` failures are non-fatal to the cart: the in-memory state the shopper
/// already saw stays, and the next successful mutation rewrites the whole
/// snapshot anyway.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// The snapshot from the last session, or `None` if none was ever saved.
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError>;

    /// Replaces the stored snapshot with `cart`.
    async fn save(&self, cart: &[CartItem]) -> Result<(), StorageError>;
}
