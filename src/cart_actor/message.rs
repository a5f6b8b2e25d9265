//! Messages understood by the cart actor.

use tokio::sync::oneshot;

use crate::cart_actor::CartError;
use crate::model::{Cart, ProductId};

/// Type alias for the one-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, CartError>>;

/// Requests the cart actor processes, one at a time, in arrival order.
///
/// Every mutation responds with the full snapshot that resulted from it, so
/// callers always render a state the actor actually held.
#[derive(Debug)]
pub enum CartRequest {
    /// Read the current snapshot.
    Snapshot { respond_to: Response<Cart> },
    /// Put one more unit of a product in the cart.
    Add {
        product_id: ProductId,
        respond_to: Response<Cart>,
    },
    /// Drop a product's entry from the cart entirely.
    Remove {
        product_id: ProductId,
        respond_to: Response<Cart>,
    },
    /// Set an entry already in the cart to an explicit quantity.
    UpdateAmount {
        product_id: ProductId,
        amount: u32,
        respond_to: Response<Cart>,
    },
}
