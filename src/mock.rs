//! # Test Doubles
//!
//! In-memory implementations of the cart's collaborator ports, for driving
//! the actor without a network or a filesystem.
//!
//! Each double keeps its state behind a `Mutex` and exposes a failure toggle
//! to simulate an outage. They live in the library rather than behind
//! `#[cfg(test)]` so integration tests and downstream consumers can reuse
//! them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::{CartItem, Product, ProductId, Stock};
use crate::notify::{Notice, NotificationSink};
use crate::services::{CatalogService, ServiceError, StockService};
use crate::storage::{CartStorage, StorageError};

/// Stock service double with per-product levels.
///
/// Unknown products fail with [`ServiceError::NotFound`], matching what the
/// HTTP client reports for a 404.
#[derive(Debug, Default)]
pub struct StubStock {
    levels: Mutex<HashMap<ProductId, u32>>,
    offline: AtomicBool,
}

impl StubStock {
    /// Sets the available stock for a product.
    pub fn set(&self, product_id: ProductId, amount: u32) {
        self.levels.lock().unwrap().insert(product_id, amount);
    }

    /// Makes every subsequent lookup fail as if the service were down.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StockService for StubStock {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("stock service offline".into()));
        }
        self.levels
            .lock()
            .unwrap()
            .get(&product_id)
            .map(|&amount| Stock { product_id, amount })
            .ok_or(ServiceError::NotFound(product_id))
    }
}

/// Catalog service double backed by a product map.
#[derive(Debug, Default)]
pub struct StubCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
    offline: AtomicBool,
}

impl StubCatalog {
    /// Registers a product in the catalog.
    pub fn add(&self, product: Product) {
        self.products.lock().unwrap().insert(product.id, product);
    }

    /// Makes every subsequent lookup fail as if the service were down.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("catalog service offline".into()));
        }
        self.products
            .lock()
            .unwrap()
            .get(&product_id)
            .cloned()
            .ok_or(ServiceError::NotFound(product_id))
    }

    async fn products(&self) -> Result<Vec<Product>, ServiceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("catalog service offline".into()));
        }
        let mut all: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|product| product.id);
        Ok(all)
    }
}

/// Storage double holding the snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<Vec<CartItem>>>,
    reject_saves: AtomicBool,
    reject_loads: AtomicBool,
}

impl MemoryStore {
    /// Seeds the snapshot a later `load` will return.
    pub fn preload(&self, items: Vec<CartItem>) {
        *self.snapshot.lock().unwrap() = Some(items);
    }

    /// The last snapshot handed to `save`, if any.
    pub fn stored(&self) -> Option<Vec<CartItem>> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Makes every subsequent `save` fail.
    pub fn reject_saves(&self) {
        self.reject_saves.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent `load` fail.
    pub fn reject_loads(&self) {
        self.reject_loads.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CartStorage for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        if self.reject_loads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage offline".into()));
        }
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn save(&self, cart: &[CartItem]) -> Result<(), StorageError> {
        if self.reject_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage offline".into()));
        }
        *self.snapshot.lock().unwrap() = Some(cart.to_vec());
        Ok(())
    }
}

/// Notification sink that records every notice for later assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    /// Drains and returns everything notified so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn stub_stock_reports_levels_and_outages() {
        let stock = StubStock::default();
        stock.set(7, 3);

        assert_eq!(stock.stock(7).await.unwrap().amount, 3);
        assert!(matches!(
            stock.stock(99).await,
            Err(ServiceError::NotFound(99))
        ));

        stock.go_offline();
        assert!(matches!(
            stock.stock(7).await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn stub_catalog_lists_products_in_id_order() {
        let catalog = StubCatalog::default();
        catalog.add(Product::new(2, "Sandal", Decimal::new(9990, 2), "2.jpg"));
        catalog.add(Product::new(1, "Sneaker", Decimal::new(17990, 2), "1.jpg"));

        let all = catalog.products().await.unwrap();
        assert_eq!(
            all.iter().map(|product| product.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn memory_store_round_trips_and_rejects_on_demand() {
        let store = MemoryStore::default();
        assert_eq!(store.load().await.unwrap(), None);

        let cart = vec![CartItem::first_of(Product::new(
            1,
            "Sneaker",
            Decimal::new(17990, 2),
            "1.jpg",
        ))];
        store.save(&cart).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(cart));

        store.reject_saves();
        assert!(store.save(&[]).await.is_err());
    }
}
