//! Product metadata and stock levels as served by the external services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier the catalog and stock services key products by.
pub type ProductId = u64;

/// Product metadata from the catalog service (`GET /products/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

/// Available quantity for one product, as reported by the stock service
/// (`GET /stock/{id}`).
///
/// Transient by design: fetched immediately before every mutating cart
/// operation and never cached, so each decision is made against fresh numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}
