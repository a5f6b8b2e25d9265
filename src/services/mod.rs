//! Ports for the external stock and catalog services.
//!
//! The cart talks to two read-only HTTP services: one reporting live stock
//! levels, one serving product metadata. Both are consumed through traits so
//! the cart can be exercised against in-process doubles (see [`crate::mock`]);
//! production wiring uses the [`HttpApi`] client, which implements both ports
//! against a single base URL the way the original storefront shared one API
//! instance.

pub mod http;

pub use http::HttpApi;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Product, ProductId, Stock};

/// Failures a service client can report.
///
/// The cart never branches on the kind — any service failure collapses into
/// the operation's generic notice — but direct callers of the clients may.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service has no record of the product.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Transport failure or a non-success HTTP status.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service could not be reached at all.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Live stock levels, queried once per mutating cart operation.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Available quantity for a product.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

/// Product metadata for cart entries and the listing page.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Metadata for a single product.
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError>;

    /// The full catalog, in listing order.
    async fn products(&self) -> Result<Vec<Product>, ServiceError>;
}
