use crate::clients::OrderClient;
use crate::desk_actor;
use crate::lifecycle::DeskConfig;
use tracing::{error, info};

/// Runtime orchestrator for the takeaway counter.
///
/// Starts the order desk actor and hands out its client. The desk is the
/// single owner of the pending-order queue.
///
/// # Example
///
/// ```ignore
/// let system = TakeawaySystem::new(DeskConfig::from_env());
/// let id = system.order_client.open_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct TakeawaySystem {
    /// Client for interacting with the order desk
    pub order_client: OrderClient,

    /// Task handle of the desk actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl TakeawaySystem {
    /// Creates the desk actor and spawns it. Must be called inside a Tokio runtime.
    pub fn new(config: DeskConfig) -> Self {
        info!(?config, "Starting takeaway system");
        let (desk, order_client) = desk_actor::new(&config);
        let handle = tokio::spawn(desk.run());

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts the desk down.
    ///
    /// Dropping the client closes the desk's channel; the actor then leaves its
    /// loop, logging how many orders were still pending. Clones of the client
    /// held elsewhere keep the desk alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Desk task failed: {:?}", e);
            return Err(format!("Desk task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
