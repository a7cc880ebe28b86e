//! # Order Desk Actor
//!
//! The desk keeps pending orders in arrival order and hands them out oldest
//! first on delivery.
//!
//! ## Structure
//!
//! - [`entity`] - [`QueueEntity`](crate::framework::QueueEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = desk_actor::new(&DeskConfig::default());
//! tokio::spawn(actor.run());
//!
//! let id = client.open_order(params).await?;
//! client.add_item(id, Pizza::plain().into()).await?;
//! let delivered = client.deliver_next().await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::QueueActor;
use crate::lifecycle::DeskConfig;
use crate::model::Order;

/// Creates a new order desk actor and its client.
pub fn new(config: &DeskConfig) -> (QueueActor<Order>, OrderClient) {
    let (actor, generic_client) = QueueActor::new(config.queue_capacity);
    (actor, OrderClient::new(generic_client))
}
