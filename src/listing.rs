//! Product listing joined with per-product cart quantities.
//!
//! The listing page shows the whole catalog with a badge for how many units
//! of each product the cart already holds. This module does that join; it
//! never mutates the cart.

use crate::cart_actor::{CartClient, CartError};
use crate::model::{amounts_by_product, Product};
use crate::services::CatalogService;

/// One product on the listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingItem {
    pub product: Product,
    /// Units of this product currently in the cart, zero when absent.
    pub in_cart: u32,
}

/// The full catalog annotated with current cart quantities.
///
/// Catalog order is preserved; products missing from the cart get a zero
/// badge rather than being filtered out.
pub async fn load_listing(
    catalog: &dyn CatalogService,
    cart: &CartClient,
) -> Result<Vec<ListingItem>, CartError> {
    let products = catalog.products().await?;
    let amounts = amounts_by_product(&cart.cart().await?);

    Ok(products
        .into_iter()
        .map(|product| {
            let in_cart = amounts.get(&product.id).copied().unwrap_or(0);
            ListingItem { product, in_cart }
        })
        .collect())
}
