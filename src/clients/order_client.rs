use crate::clients::actor_client::ActorClient;
use crate::desk_actor::{ItemAdded, OrderAction, OrderActionResult, OrderError, OrderQuote};
use crate::framework::{FrameworkError, QueueClient};
use crate::model::{MenuItem, Order, OrderCreate, OrderId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order desk.
///
/// Pricing and promotions run inside the desk actor, against the queued
/// order; this wrapper only shapes requests and unpacks results.
#[derive(Clone)]
pub struct OrderClient {
    inner: QueueClient<Order>,
}

impl OrderClient {
    pub fn new(inner: QueueClient<Order>) -> Self {
        Self { inner }
    }

    /// Queues a new, empty order for a customer.
    #[instrument(skip(self, params), fields(customer = %params.customer_name))]
    pub async fn open_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "open_order called");
        let id = self.inner.enqueue(params).await?;
        info!(%id, "Order opened");
        Ok(id)
    }

    /// Adds one item to a queued order.
    #[instrument(skip(self, item))]
    pub async fn add_item(&self, id: OrderId, item: MenuItem) -> Result<ItemAdded, OrderError> {
        debug!(?item, "add_item called");
        match self.inner.perform_action(id, OrderAction::AddItem(item)).await? {
            OrderActionResult::AddItem(added) => {
                for kind in &added.free_items {
                    info!(%kind, "Free item added to order");
                }
                Ok(added)
            }
            other => Err(OrderError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Current total and classification of a queued order.
    #[instrument(skip(self))]
    pub async fn quote(&self, id: OrderId) -> Result<OrderQuote, OrderError> {
        match self.inner.perform_action(id, OrderAction::Quote).await? {
            OrderActionResult::Quote(quote) => Ok(quote),
            other => Err(OrderError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Hands over the oldest pending order, or `None` when the desk is empty.
    #[instrument(skip(self))]
    pub async fn deliver_next(&self) -> Result<Option<(OrderId, Order)>, OrderError> {
        let delivered = self.inner.dequeue().await?;
        match &delivered {
            Some((id, order)) => info!(%id, total = %order.total_cost(), "Order delivered"),
            None => info!("No orders to deliver"),
        }
        Ok(delivered)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &QueueClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
