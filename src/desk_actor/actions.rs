//! Custom actions for the order desk.
//!
//! Orders are never updated wholesale; the only mutation is adding one item,
//! which is handled by [`QueueEntity::handle_action`](crate::framework::QueueEntity::handle_action).

use crate::model::{FoodType, ItemKind, MenuItem, Price};

/// Operations on an order that is waiting at the desk.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Adds one item, possibly triggering a free item.
    AddItem(MenuItem),
    /// Reads the current totals without changing anything.
    Quote,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    AddItem(ItemAdded),
    Quote(OrderQuote),
}

/// State of an order right after an item was added.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAdded {
    pub total: Price,
    pub classification: FoodType,
    /// Free items appended by this addition, pizza first.
    pub free_items: Vec<ItemKind>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderQuote {
    pub total: Price,
    pub classification: FoodType,
    pub item_count: usize,
}
