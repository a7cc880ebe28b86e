//! [`QueueEntity`] implementation for [`Order`], letting the desk's
//! [`QueueActor`](crate::framework::QueueActor) hold pending orders.

use super::actions::{ItemAdded, OrderAction, OrderActionResult, OrderQuote};
use crate::framework::QueueEntity;
use crate::model::{ItemKind, Order, OrderCreate, OrderId};
use std::convert::Infallible;

impl QueueEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    // Adding items and quoting are total operations.
    type Error = Infallible;

    fn from_create_params(params: OrderCreate) -> Result<Self, Infallible> {
        Ok(Order::from(params))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, Infallible> {
        let result = match action {
            OrderAction::AddItem(item) => {
                let before = [ItemKind::Pizza, ItemKind::Pasta].map(|kind| self.promotion_granted(kind));
                self.add_item(item);
                let free_items = [ItemKind::Pizza, ItemKind::Pasta]
                    .into_iter()
                    .zip(before)
                    .filter(|&(kind, was_granted)| !was_granted && self.promotion_granted(kind))
                    .map(|(kind, _)| kind)
                    .collect();
                OrderActionResult::AddItem(ItemAdded {
                    total: self.total_cost(),
                    classification: self.classification(),
                    free_items,
                })
            }
            OrderAction::Quote => OrderActionResult::Quote(OrderQuote {
                total: self.total_cost(),
                classification: self.classification(),
                item_count: self.items().len(),
            }),
        };
        Ok(result)
    }
}
