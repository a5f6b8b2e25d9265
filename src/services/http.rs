//! HTTP implementations of the stock and catalog ports.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::model::{Product, ProductId, Stock};
use crate::services::{CatalogService, ServiceError, StockService};

/// Client for the storefront's backing REST API.
///
/// One instance implements both ports: stock and catalog hang off the same
/// base URL (`/stock/{id}`, `/products/{id}`, `/products`), so a single
/// connection pool serves them.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Creates a client for the API rooted at `base_url`. A trailing slash on
    /// the base is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Folds an HTTP 404 into the port-level `NotFound` for lookups keyed by a
/// product id.
fn map_product_error(product_id: ProductId, err: ServiceError) -> ServiceError {
    match err {
        ServiceError::Http(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
            ServiceError::NotFound(product_id)
        }
        other => other,
    }
}

#[async_trait]
impl StockService for HttpApi {
    #[instrument(skip(self))]
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.get_json(&format!("/stock/{product_id}"))
            .await
            .map_err(|e| map_product_error(product_id, e))
    }
}

#[async_trait]
impl CatalogService for HttpApi {
    #[instrument(skip(self))]
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        self.get_json(&format!("/products/{product_id}"))
            .await
            .map_err(|e| map_product_error(product_id, e))
    }

    #[instrument(skip(self))]
    async fn products(&self) -> Result<Vec<Product>, ServiceError> {
        self.get_json("/products").await
    }
}
