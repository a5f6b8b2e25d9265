//! Cart state types: the items a shopper intends to purchase.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// A read-only snapshot of the cart sequence, insertion order preserved.
///
/// Snapshots are immutable and cheap to clone. The cart actor builds a fresh
/// sequence for every successful mutation and swaps it in whole, so a snapshot
/// held by a reader never changes underneath it.
pub type Cart = Arc<[CartItem]>;

/// One product's presence and quantity in the shopping cart.
///
/// At most one item exists per product id. `amount` is at least 1 and stays
/// within the stock level observed at the last successful mutation; it is not
/// re-validated between operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub amount: u32,
}

impl CartItem {
    /// First unit of a product entering the cart.
    pub fn first_of(product: Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

/// Sum of all line totals.
pub fn cart_total(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc + item.line_total())
}

/// Quantity in the cart per product id, for overlaying on product listings.
pub fn amounts_by_product(items: &[CartItem]) -> HashMap<ProductId, u32> {
    items
        .iter()
        .map(|item| (item.product_id, item.amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ProductId, price: &str, amount: u32) -> CartItem {
        CartItem {
            product_id: id,
            title: format!("item {id}"),
            price: price.parse().unwrap(),
            image: String::new(),
            amount,
        }
    }

    #[test]
    fn snapshot_serializes_with_wire_field_names() {
        let json = serde_json::to_value(item(7, "179.90", 2)).unwrap();
        assert_eq!(json["productId"], 7);
        assert_eq!(json["amount"], 2);
    }

    #[test]
    fn price_accepts_numbers_and_strings() {
        let from_number: CartItem = serde_json::from_value(serde_json::json!({
            "productId": 1, "title": "t", "price": 180, "image": "", "amount": 1
        }))
        .unwrap();
        let from_string: CartItem = serde_json::from_value(serde_json::json!({
            "productId": 1, "title": "t", "price": "180", "image": "", "amount": 1
        }))
        .unwrap();
        assert_eq!(from_number.price, from_string.price);
    }

    #[test]
    fn totals_multiply_and_sum() {
        let items = [item(1, "10.50", 2), item(2, "0.99", 3)];
        assert_eq!(items[0].line_total(), "21.00".parse().unwrap());
        assert_eq!(cart_total(&items), "23.97".parse().unwrap());
    }

    #[test]
    fn amounts_map_follows_entries() {
        let items = [item(1, "1", 2), item(9, "1", 5)];
        let amounts = amounts_by_product(&items);
        assert_eq!(amounts.get(&1), Some(&2));
        assert_eq!(amounts.get(&9), Some(&5));
        assert_eq!(amounts.get(&3), None);
    }
}
