//! The server half of the cart: owns the snapshot, applies every mutation.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cart_actor::{CartError, CartRequest};
use crate::model::{Cart, CartItem, ProductId};
use crate::notify::{Notice, NotificationSink};
use crate::services::{CatalogService, StockService};
use crate::storage::CartStorage;

/// External collaborators injected into the actor's run loop.
///
/// Dependencies arrive at `run` rather than at construction, so the system
/// can be wired in any order: build the actor and client first, connect the
/// services, then spawn the loop.
pub struct CartContext {
    pub stock: Arc<dyn StockService>,
    pub catalog: Arc<dyn CatalogService>,
    pub storage: Arc<dyn CartStorage>,
    pub notices: Arc<dyn NotificationSink>,
}

/// The actor that owns the cart state.
///
/// # Concurrency Model
/// All mutations flow through one mailbox and are applied by this single
/// task, one request at a time. Two rapid "add to cart" clicks therefore
/// cannot interleave their check-then-write steps: the second one runs
/// against the state the first one produced. No locks are involved; the
/// actor has exclusive ownership of the snapshot.
pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    state: Cart,
}

impl CartActor {
    pub(super) fn new(receiver: mpsc::Receiver<CartRequest>) -> Self {
        Self {
            receiver,
            state: Arc::from(Vec::new()),
        }
    }

    /// Runs the actor's event loop, processing requests until every client
    /// handle is gone.
    ///
    /// The previous session's snapshot is restored before the first request
    /// is taken, so callers never observe a half-restored cart. An unreadable
    /// snapshot downgrades to an empty cart rather than poisoning startup.
    pub async fn run(mut self, ctx: CartContext) {
        match ctx.storage.load().await {
            Ok(Some(items)) => {
                info!(items = items.len(), "restored cart snapshot");
                self.state = items.into();
            }
            Ok(None) => info!("no stored cart, starting empty"),
            Err(e) => warn!(error = %e, "stored cart unreadable, starting empty"),
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::Snapshot { respond_to } => {
                    debug!(items = self.state.len(), "snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                CartRequest::Add {
                    product_id,
                    respond_to,
                } => {
                    debug!(product_id, "add");
                    let result = self.add(product_id, &ctx).await;
                    if let Err(e) = &result {
                        warn!(product_id, error = %e, "add rejected");
                        ctx.notices.notify(notice_for(e, Notice::AddFailed));
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::Remove {
                    product_id,
                    respond_to,
                } => {
                    debug!(product_id, "remove");
                    let result = self.remove(product_id, &ctx).await;
                    if let Err(e) = &result {
                        warn!(product_id, error = %e, "remove rejected");
                        ctx.notices.notify(notice_for(e, Notice::RemoveFailed));
                    }
                    let _ = respond_to.send(result);
                }
                CartRequest::UpdateAmount {
                    product_id,
                    amount,
                    respond_to,
                } => {
                    debug!(product_id, amount, "update amount");
                    let result = self.update_amount(product_id, amount, &ctx).await;
                    if let Err(e) = &result {
                        warn!(product_id, amount, error = %e, "update amount rejected");
                        ctx.notices.notify(notice_for(e, Notice::UpdateFailed));
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(items = self.state.len(), "cart actor shutdown");
    }

    /// Adds one unit of `product_id`, inserting a fresh entry when absent.
    ///
    /// Stock is re-fetched on every call rather than cached: availability can
    /// change between a page view and a click.
    async fn add(&mut self, product_id: ProductId, ctx: &CartContext) -> Result<Cart, CartError> {
        let stock = ctx.stock.stock(product_id).await?;
        let current = self
            .state
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.amount);

        let requested = current.map_or(1, |amount| amount + 1);
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                requested,
                available: stock.amount,
            });
        }

        let next = match current {
            Some(_) => with_amount(&self.state, product_id, requested),
            None => {
                let product = ctx.catalog.product(product_id).await?;
                let mut next = self.state.to_vec();
                next.push(CartItem::first_of(product));
                next
            }
        };
        self.commit("add", next, ctx).await
    }

    async fn remove(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<Cart, CartError> {
        if !self.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }
        let next = self
            .state
            .iter()
            .filter(|item| item.product_id != product_id)
            .cloned()
            .collect();
        self.commit("remove", next, ctx).await
    }

    /// Sets an existing entry to an explicit quantity.
    ///
    /// Membership and the amount itself are checked before the stock lookup;
    /// only a request that could otherwise succeed costs a network round trip.
    async fn update_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
        ctx: &CartContext,
    ) -> Result<Cart, CartError> {
        if amount == 0 {
            return Err(CartError::InvalidAmount(amount));
        }
        if !self.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        let stock = ctx.stock.stock(product_id).await?;
        if stock.amount < amount {
            return Err(CartError::StockExceeded {
                requested: amount,
                available: stock.amount,
            });
        }

        let next = with_amount(&self.state, product_id, amount);
        self.commit("update amount", next, ctx).await
    }

    fn contains(&self, product_id: ProductId) -> bool {
        self.state.iter().any(|item| item.product_id == product_id)
    }

    /// Publishes `next` as the live snapshot and persists it.
    ///
    /// Persistence is best-effort: the mutation already happened from the
    /// shopper's point of view, so a failed write logs and the in-memory
    /// state stands. The next successful mutation rewrites the snapshot.
    async fn commit(
        &mut self,
        op: &'static str,
        next: Vec<CartItem>,
        ctx: &CartContext,
    ) -> Result<Cart, CartError> {
        if let Err(e) = ctx.storage.save(&next).await {
            warn!(op, error = %e, "cart snapshot not saved");
        }
        self.state = next.into();
        info!(op, items = self.state.len(), "cart updated");
        Ok(self.state.clone())
    }
}

/// The shopper-facing notice for a rejected mutation: the stock message when
/// availability ran out, otherwise the operation's own failure message.
fn notice_for(err: &CartError, fallback: Notice) -> Notice {
    match err {
        CartError::StockExceeded { .. } => Notice::StockExceeded,
        _ => fallback,
    }
}

/// A copy of `items` with the entry for `product_id` set to `amount`.
fn with_amount(items: &[CartItem], product_id: ProductId, amount: u32) -> Vec<CartItem> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.product_id == product_id {
                item.amount = amount;
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use rust_decimal::Decimal;

    #[test]
    fn stock_exceeded_overrides_the_generic_notice() {
        let err = CartError::StockExceeded {
            requested: 4,
            available: 3,
        };
        assert_eq!(notice_for(&err, Notice::AddFailed), Notice::StockExceeded);
        assert_eq!(notice_for(&err, Notice::UpdateFailed), Notice::StockExceeded);

        let err = CartError::NotInCart(9);
        assert_eq!(notice_for(&err, Notice::RemoveFailed), Notice::RemoveFailed);
    }

    #[test]
    fn with_amount_touches_only_the_matching_entry() {
        let items = vec![
            CartItem::first_of(Product::new(1, "Sneaker", Decimal::new(17990, 2), "1.jpg")),
            CartItem::first_of(Product::new(2, "Sandal", Decimal::new(9990, 2), "2.jpg")),
        ];

        let next = with_amount(&items, 2, 5);

        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].amount, 5);
        assert_eq!(next[1].title, items[1].title);
    }
}
