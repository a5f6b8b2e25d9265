use std::sync::Arc;

use tracing::{error, info};

use crate::cart_actor::{self, CartClient, CartContext};
use crate::notify::LogSink;
use crate::services::HttpApi;
use crate::storage::JsonFileStore;

/// The runtime orchestrator for the cart.
///
/// `CartSystem` owns the cart actor's task handle and hands out the
/// [`CartClient`] the embedding UI talks through. It is responsible for:
/// - **Lifecycle**: spawning the actor and joining it on shutdown
/// - **Wiring**: injecting the stock/catalog/storage/notice collaborators
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::connect("http://localhost:3333", "cart-state.json");
///
/// let cart = system.cart_client.add_product(7).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor.
    pub cart_client: CartClient,

    /// Handle of the running actor task, joined on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Spawns the cart actor with the given collaborators.
    ///
    /// The actor restores its snapshot from `ctx.storage` before taking the
    /// first request, so the client returned here always observes a fully
    /// loaded cart.
    pub fn start(ctx: CartContext) -> Self {
        let (actor, cart_client) = cart_actor::new();
        let handle = tokio::spawn(actor.run(ctx));
        info!("cart system started");

        Self {
            cart_client,
            handle,
        }
    }

    /// Production wiring: HTTP stock/catalog clients rooted at `base_url`,
    /// a JSON file snapshot at `storage_path`, notices into the log stream.
    pub fn connect(base_url: impl Into<String>, storage_path: impl Into<std::path::PathBuf>) -> Self {
        let api = Arc::new(HttpApi::new(base_url));
        Self::start(CartContext {
            stock: api.clone(),
            catalog: api,
            storage: Arc::new(JsonFileStore::new(storage_path)),
            notices: Arc::new(LogSink),
        })
    }

    /// Gracefully shuts down the cart.
    ///
    /// Drops this handle's client, which closes the mailbox once every other
    /// clone is gone too; the actor drains what is queued, exits its loop,
    /// and the task is joined. Requests accepted before shutdown still get
    /// their responses.
    ///
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("shutting down cart system");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("cart actor task failed: {e:?}");
            return Err(format!("cart actor task failed: {e:?}"));
        }

        info!("cart system shutdown complete");
        Ok(())
    }
}
