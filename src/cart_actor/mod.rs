//! Cart state management behind a single-writer actor.
//!
//! The cart is one aggregate with a strict consistency story: every mutation
//! validates against live stock, computes a whole new snapshot, swaps it in,
//! and persists it. Funneling all of that through one mailbox makes the
//! read-check-write sequence atomic without a single lock.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::{CartActor, CartContext};
pub use client::CartClient;
pub use error::CartError;
pub use message::{CartRequest, Response};

use tokio::sync::mpsc;

/// Creates a new cart actor and its client.
///
/// The actor does nothing until [`CartActor::run`] is spawned with a
/// [`CartContext`].
pub fn new() -> (CartActor, CartClient) {
    let (sender, receiver) = mpsc::channel(32);
    (CartActor::new(receiver), CartClient::new(sender))
}
