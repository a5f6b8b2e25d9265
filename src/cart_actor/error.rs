//! Error types for the cart actor.

use thiserror::Error;

use crate::model::ProductId;
use crate::services::ServiceError;

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity is not covered by the product's current stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    StockExceeded { requested: u32, available: u32 },

    /// The product has no entry in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// The requested quantity cannot be applied to a cart entry.
    #[error("invalid amount: {0}")]
    InvalidAmount(u32),

    /// A stock or catalog lookup failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The cart actor is gone or dropped the response channel.
    #[error("cart actor unavailable: {0}")]
    ActorUnavailable(String),
}
