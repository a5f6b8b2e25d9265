//! HTTP client integration tests.
//!
//! Starts an axum server standing in for the storefront API and exercises the
//! real `HttpApi` client against it.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use shopcart::cart_actor::{self, CartContext};
use shopcart::listing::load_listing;
use shopcart::mock::{MemoryStore, RecordingSink};
use shopcart::services::{CatalogService, HttpApi, ServiceError, StockService};

fn product_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Tênis {id}"),
        "price": 179.9,
        "image": format!("https://cdn.example/{id}.jpg"),
    })
}

fn api_router() -> Router {
    Router::new()
        .route(
            "/products",
            get(|| async { Json(json!([product_json(1), product_json(2)])) }),
        )
        .route(
            "/products/:id",
            get(|Path(id): Path<u64>| async move {
                match id {
                    1 | 2 => Ok(Json(product_json(id))),
                    _ => Err(StatusCode::NOT_FOUND),
                }
            }),
        )
        .route(
            "/stock/:id",
            get(|Path(id): Path<u64>| async move {
                match id {
                    1 => Ok(Json(json!({ "productId": 1, "amount": 3 }))),
                    2 => Ok(Json(json!({ "productId": 2, "amount": 0 }))),
                    _ => Err(StatusCode::NOT_FOUND),
                }
            }),
        )
}

/// Bind to port 0 and return the actual base URL.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_router()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn stock_and_product_lookups_decode_the_wire_shapes() {
    let api = HttpApi::new(start_server().await);

    let stock = api.stock(1).await.unwrap();
    assert_eq!(stock.product_id, 1);
    assert_eq!(stock.amount, 3);

    let product = api.product(2).await.unwrap();
    assert_eq!(product.title, "Tênis 2");
    assert_eq!(product.price, Decimal::new(1799, 1));

    let all = api.products().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
}

#[tokio::test]
async fn missing_products_map_to_not_found() {
    let api = HttpApi::new(start_server().await);

    assert!(matches!(api.stock(42).await, Err(ServiceError::NotFound(42))));
    assert!(matches!(
        api.product(42).await,
        Err(ServiceError::NotFound(42))
    ));
}

#[tokio::test]
async fn unreachable_service_surfaces_a_transport_error() {
    // Nothing listens here; the connection itself fails.
    let api = HttpApi::new("http://127.0.0.1:9");

    assert!(matches!(api.stock(1).await, Err(ServiceError::Http(_))));
}

/// End to end over HTTP: the cart consumes real wire data and the listing
/// page joins it with in-cart amounts.
#[tokio::test]
async fn cart_and_listing_work_against_the_http_api() {
    let api = Arc::new(HttpApi::new(start_server().await));

    let (actor, client) = cart_actor::new();
    tokio::spawn(actor.run(CartContext {
        stock: api.clone(),
        catalog: api.clone(),
        storage: Arc::new(MemoryStore::default()),
        notices: Arc::new(RecordingSink::default()),
    }));

    let cart = client.add_product(1).await.unwrap();
    assert_eq!(cart[0].title, "Tênis 1");
    assert_eq!(cart[0].price, Decimal::new(1799, 1));

    // Product 2 reports zero stock; the add is rejected on the wire data.
    assert!(client.add_product(2).await.is_err());

    let listing = load_listing(api.as_ref(), &client).await.unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].in_cart, 1);
    assert_eq!(listing[1].in_cart, 0);
}
