//! Clone-able handle for talking to the cart actor.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::cart_actor::{CartError, CartRequest};
use crate::model::{Cart, ProductId};

/// Client for interacting with the cart actor.
///
/// Cloning is cheap; every clone feeds the same mailbox, and the actor
/// applies requests strictly in arrival order. All methods suspend until the
/// actor has fully processed the request.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub(super) fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// The current cart snapshot.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Cart, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Snapshot { respond_to })
            .await
            .map_err(|_| CartError::ActorUnavailable("mailbox closed".into()))?;
        response
            .await
            .map_err(|_| CartError::ActorUnavailable("response dropped".into()))?
    }

    /// Adds one unit of `product_id` to the cart.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("sending add to cart actor");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Add {
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| CartError::ActorUnavailable("mailbox closed".into()))?;
        response
            .await
            .map_err(|_| CartError::ActorUnavailable("response dropped".into()))?
    }

    /// Removes the entry for `product_id` from the cart.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        debug!("sending remove to cart actor");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::Remove {
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| CartError::ActorUnavailable("mailbox closed".into()))?;
        response
            .await
            .map_err(|_| CartError::ActorUnavailable("response dropped".into()))?
    }

    /// Sets the entry for `product_id` to an explicit quantity.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: u32,
    ) -> Result<Cart, CartError> {
        debug!("sending update amount to cart actor");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CartRequest::UpdateAmount {
                product_id,
                amount,
                respond_to,
            })
            .await
            .map_err(|_| CartError::ActorUnavailable("mailbox closed".into()))?;
        response
            .await
            .map_err(|_| CartError::ActorUnavailable("response dropped".into()))?
    }
}
