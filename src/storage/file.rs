//! Cart snapshot persistence backed by a JSON document on disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::model::CartItem;
use crate::storage::{CartStorage, StorageError, CART_KEY};

/// File-backed key-value store holding the cart snapshot.
///
/// The file is one JSON object mapping string keys to records, so the same
/// document can host other namespaced state later without a format change.
/// Writes go through a temporary file in the same directory followed by a
/// rename, which keeps a crash from leaving a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Store whose document lives at `path`, with the cart under [`CART_KEY`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, CART_KEY)
    }

    /// Store using a caller-chosen record key.
    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    async fn read_document(&self) -> Result<Map<String, Value>, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, doc: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("snapshot");
        let tmp = self.path.with_file_name(format!(".{name}.tmp"));

        let bytes = serde_json::to_vec(doc)?;
        let mut file = fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CartStorage for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let doc = self.read_document().await?;
        match doc.get(&self.key) {
            Some(record) => Ok(Some(serde_json::from_value(record.clone())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, cart: &[CartItem]) -> Result<(), StorageError> {
        let mut doc = match self.read_document().await {
            Ok(doc) => doc,
            // An unreadable document cannot be merged into; the snapshot we
            // are about to write is the state worth keeping.
            Err(StorageError::Malformed(err)) => {
                warn!(error = %err, path = %self.path.display(), "replacing unreadable storage document");
                Map::new()
            }
            Err(err) => return Err(err),
        };
        doc.insert(self.key.clone(), serde_json::to_value(cart)?);
        self.write_document(&doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use rust_decimal::Decimal;

    fn item(product_id: u64, amount: u32) -> CartItem {
        let mut item = CartItem::first_of(Product::new(
            product_id,
            format!("Product {product_id}"),
            Decimal::new(17990, 2),
            "product.jpg",
        ));
        item.amount = amount;
        item
    }

    #[tokio::test]
    async fn load_without_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn snapshot_round_trips_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let cart = vec![item(1, 2), item(9, 1)];

        JsonFileStore::new(&path).save(&cart).await.unwrap();
        let reloaded = JsonFileStore::new(&path).load().await.unwrap();

        assert_eq!(reloaded, Some(cart));
    }

    #[tokio::test]
    async fn save_keeps_unrelated_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"shopcart:theme":"dark"}"#).unwrap();

        JsonFileStore::new(&path).save(&[item(4, 1)]).await.unwrap();

        let doc: Map<String, Value> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc.get("shopcart:theme"), Some(&Value::from("dark")));
        assert!(doc.contains_key(CART_KEY));
    }

    #[tokio::test]
    async fn corrupt_document_fails_load_but_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(StorageError::Malformed(_))
        ));

        store.save(&[item(2, 3)]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(vec![item(2, 3)]));
    }
}
