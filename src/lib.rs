#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # shopcart
//!
//! > **A client-side shopping cart with stock-checked mutations and durable snapshots.**
//!
//! This crate is the state manager behind a small storefront UI: it owns the list of
//! items a shopper intends to purchase, enforces stock limits against a live stock
//! service, and persists the cart across sessions. The embedding UI never touches
//! cart state directly; it holds a [`CartClient`](cart_actor::CartClient) and reads
//! back immutable snapshots.
//!
//! ## 🏗️ Design
//!
//! The cart is a single aggregate with a check-then-write consistency problem:
//! every mutation must validate against stock fetched over the network before it
//! commits. Two rapid clicks racing through that sequence would silently lose an
//! update, so all mutations are funneled through one actor:
//!
//! - **Single-writer mailbox**: a Tokio task owns the cart exclusively and applies
//!   requests one at a time, in arrival order. No locks, no lost updates.
//! - **Copy-on-write snapshots**: the state is an immutable `Arc<[CartItem]>`;
//!   each successful mutation builds a whole new sequence and swaps it in, so a
//!   reader never observes a half-applied cart.
//! - **Best-effort persistence**: every successful mutation rewrites the full
//!   snapshot in durable storage. A failed write logs and moves on; the state the
//!   shopper already saw is never rolled back.
//!
//! ## 🗺️ Module Tour
//!
//! - [`cart_actor`] - the core: actor, client handle, request messages, errors.
//! - [`model`] - plain data types: [`CartItem`](model::CartItem),
//!   [`Product`](model::Product), [`Stock`](model::Stock), cart arithmetic.
//! - [`services`] - the stock and catalog ports plus the
//!   [`HttpApi`](services::HttpApi) client implementing both.
//! - [`storage`] - the snapshot port plus the file-backed
//!   [`JsonFileStore`](storage::JsonFileStore).
//! - [`notify`] - user-facing notices and the sink they are pushed through.
//! - [`listing`] - glue for the product listing page (catalog joined with
//!   in-cart amounts).
//! - [`runtime`] - [`CartSystem`](runtime::CartSystem) wiring/lifecycle and
//!   tracing setup.
//! - [`mock`] - in-memory doubles for every port, public so downstream
//!   consumers can test against the cart without a network.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use shopcart::runtime::{setup_tracing, CartSystem};
//!
//! setup_tracing();
//! let system = CartSystem::connect("http://localhost:3333", "cart-state.json");
//!
//! let cart = system.cart_client.add_product(7).await?;
//! println!("{} item(s) in cart", cart.len());
//!
//! system.shutdown().await?;
//! ```

pub mod cart_actor;
pub mod listing;
pub mod mock;
pub mod model;
pub mod notify;
pub mod runtime;
pub mod services;
pub mod storage;
