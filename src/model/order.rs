//! The order aggregate and its "buy two, get one free" promotion.
//!
//! An [`Order`] holds its items in arrival order and keeps the derived state
//! (total cost, meal classification, promotion flags) consistent after every
//! addition. The moment an order holds two pizzas a plain pizza at price zero
//! is appended, and likewise for pasta. Each kind is granted at most once per
//! order and the grant is never revoked.

use super::food_item::{FoodItem, ItemKind, MenuItem};
use super::{FoodType, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, info};

/// Type-safe identifier for queued Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A customer's takeaway order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    customer_name: String,
    customer_contact: u64,
    customer_address: String,
    items: Vec<MenuItem>,
    classification: FoodType,
    total_cost: Price,
    free_pizza_granted: bool,
    free_pasta_granted: bool,
}

/// Payload for opening a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_contact: u64,
    pub customer_address: String,
}

impl Order {
    /// Creates an empty order for the given customer.
    ///
    /// # Arguments
    /// * `customer_name` - Name as entered at the counter
    /// * `customer_contact` - Phone number
    /// * `customer_address` - Delivery address
    ///
    /// # Notes
    /// Inputs are expected to be validated already; nothing is checked here.
    pub fn new(
        customer_name: impl Into<String>,
        customer_contact: u64,
        customer_address: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_contact,
            customer_address: customer_address.into(),
            items: Vec::new(),
            classification: FoodType::Vegan,
            total_cost: Price::ZERO,
            free_pizza_granted: false,
            free_pasta_granted: false,
        }
    }

    /// Appends an item and brings total, classification and promotions up to date.
    ///
    /// A free item earned by this addition is appended in the same call and
    /// shows up in [`promotion_granted`](Self::promotion_granted).
    pub fn add_item(&mut self, item: impl Into<MenuItem>) {
        let item = item.into();
        debug!(kind = %item.kind(), price = %item.price(), "Adding item");
        self.items.push(item);
        self.recompute_cost_and_promotions();
        self.recompute_classification();
        debug!(
            items = self.items.len(),
            total = %self.total_cost,
            classification = %self.classification,
            "Order recomputed"
        );
    }

    fn recompute_cost_and_promotions(&mut self) {
        for kind in [ItemKind::Pizza, ItemKind::Pasta] {
            if self.promotion_granted(kind) {
                continue;
            }
            let mut of_kind = self.items.iter().filter(|item| item.kind() == kind);
            let Some(first) = of_kind.next() else {
                continue;
            };
            let count = 1 + of_kind.count();
            if first.free_item_count(count) == 0 {
                continue;
            }
            self.items.push(MenuItem::plain(kind).into_complimentary());
            self.set_promotion_granted(kind);
            info!(%kind, count, "Free item granted");
        }
        self.total_cost = self.items.iter().map(FoodItem::price).sum();
    }

    fn recompute_classification(&mut self) {
        let mut vegetarian = false;
        for item in &self.items {
            match item.classification() {
                FoodType::Meat => {
                    self.classification = FoodType::Meat;
                    return;
                }
                FoodType::Vegetarian => vegetarian = true,
                FoodType::Vegan => {}
            }
        }
        self.classification = if vegetarian {
            FoodType::Vegetarian
        } else {
            FoodType::Vegan
        };
    }

    pub fn promotion_granted(&self, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Pizza => self.free_pizza_granted,
            ItemKind::Pasta => self.free_pasta_granted,
        }
    }

    fn set_promotion_granted(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Pizza => self.free_pizza_granted = true,
            ItemKind::Pasta => self.free_pasta_granted = true,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_contact(&self) -> u64 {
        self.customer_contact
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    /// Items in the order they were added, free items included.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn classification(&self) -> FoodType {
        self.classification
    }

    pub fn total_cost(&self) -> Price {
        self.total_cost
    }

    pub fn free_pizza_granted(&self) -> bool {
        self.free_pizza_granted
    }

    pub fn free_pasta_granted(&self) -> bool {
        self.free_pasta_granted
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Multi-line summary for the counter display. Same as `to_string()`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<OrderCreate> for Order {
    fn from(params: OrderCreate) -> Self {
        Order::new(
            params.customer_name,
            params.customer_contact,
            params.customer_address,
        )
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        writeln!(f, "Contact Number: {}", self.customer_contact)?;
        writeln!(f, "Delivery Address: {}", self.customer_address)?;
        writeln!(f)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        if self.free_pizza_granted {
            writeln!(f, "You've received a FREE Pizza for ordering 2 or more pizzas!")?;
        }
        if self.free_pasta_granted {
            writeln!(f, "You've received a FREE Pasta for ordering 2 or more pastas!")?;
        }
        writeln!(f, "Meal Type: {}", self.classification)?;
        write!(f, "Total Cost: ${}", self.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pasta, PastaTopping, Pizza, PizzaTopping};

    fn order() -> Order {
        Order::new("Alice", 12345678, "1 Main Street")
    }

    fn assert_total_is_sum(order: &Order) {
        let sum: Price = order.items().iter().map(FoodItem::price).sum();
        assert_eq!(order.total_cost(), sum);
    }

    #[test]
    fn test_empty_order_is_vegan_and_free() {
        let order = order();
        assert!(order.is_empty());
        assert_eq!(order.classification(), FoodType::Vegan);
        assert_eq!(order.total_cost(), Price::ZERO);
        assert!(!order.free_pizza_granted());
        assert!(!order.free_pasta_granted());
    }

    #[test]
    fn test_single_plain_pizza() {
        let mut order = order();
        order.add_item(Pizza::plain());
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.total_cost(), Price::from_cents(1150));
        assert_eq!(order.classification(), FoodType::Vegan);
        assert!(!order.free_pizza_granted());
    }

    #[test]
    fn test_two_pizzas_earn_a_free_plain_pizza() {
        let mut order = order();
        order.add_item(Pizza::new(vec![PizzaTopping::Ham]));
        assert!(!order.promotion_granted(ItemKind::Pizza));
        order.add_item(Pizza::plain());

        assert!(order.promotion_granted(ItemKind::Pizza));
        assert_eq!(order.items().len(), 3);
        let free = &order.items()[2];
        assert_eq!(free, &MenuItem::Pizza(Pizza::plain().into_complimentary()));
        assert_eq!(free.price(), Price::ZERO);
        assert_eq!(order.total_cost(), Price::from_cents(2500));
        assert_eq!(order.classification(), FoodType::Meat);
        assert!(order.free_pizza_granted());
        assert_total_is_sum(&order);
    }

    #[test]
    fn test_two_pastas_earn_a_free_plain_pasta() {
        let mut order = order();
        order.add_item(Pasta::new(Some(PastaTopping::Primavera)));
        order.add_item(Pasta::plain());

        assert_eq!(order.items().len(), 3);
        assert_eq!(order.items()[2], MenuItem::Pasta(Pasta::plain().into_complimentary()));
        assert_eq!(order.total_cost(), Price::from_cents(2820));
        assert_eq!(order.classification(), FoodType::Vegetarian);
        assert!(order.free_pasta_granted());
        assert!(!order.free_pizza_granted());
    }

    #[test]
    fn test_free_pizza_granted_only_once() {
        let mut order = order();
        order.add_item(Pizza::plain());
        assert!(!order.free_pizza_granted());
        order.add_item(Pizza::plain());
        assert!(order.free_pizza_granted());
        order.add_item(Pizza::plain());
        assert!(order.free_pizza_granted());

        assert_eq!(order.count_of(ItemKind::Pizza), 4);
        let free = order.items().iter().filter(|item| item.price().is_zero()).count();
        assert_eq!(free, 1);
        assert_eq!(order.total_cost(), Price::from_cents(3 * 1150));
        assert_total_is_sum(&order);
    }

    #[test]
    fn test_promotions_are_independent_per_kind() {
        let mut order = order();
        order.add_item(Pizza::plain());
        order.add_item(Pasta::plain());
        order.add_item(Pizza::plain());
        assert!(order.free_pizza_granted());
        assert!(!order.free_pasta_granted());

        order.add_item(Pasta::new(Some(PastaTopping::Tomato)));
        assert!(order.free_pasta_granted());
        assert_eq!(order.count_of(ItemKind::Pizza), 3);
        assert_eq!(order.count_of(ItemKind::Pasta), 3);
        assert_eq!(
            order.total_cost(),
            Price::from_cents(1150 + 1150 + 1150 + 1550)
        );
    }

    #[test]
    fn test_meat_dominates_regardless_of_position() {
        let mut first = order();
        first.add_item(Pasta::new(Some(PastaTopping::Bolognese)));
        first.add_item(Pizza::new(vec![PizzaTopping::Cheese]));
        first.add_item(Pasta::plain());
        assert_eq!(first.classification(), FoodType::Meat);

        let mut last = order();
        last.add_item(Pizza::new(vec![PizzaTopping::Cheese]));
        last.add_item(Pizza::new(vec![PizzaTopping::Mushrooms]));
        assert_eq!(last.classification(), FoodType::Vegetarian);
        last.add_item(Pasta::new(Some(PastaTopping::Marinara)));
        assert_eq!(last.classification(), FoodType::Meat);
    }

    #[test]
    fn test_free_item_keeps_arrival_order() {
        let mut order = order();
        order.add_item(Pasta::plain());
        order.add_item(Pizza::plain());
        order.add_item(Pizza::plain());
        order.add_item(Pasta::plain());

        let kinds: Vec<ItemKind> = order.items().iter().map(MenuItem::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::Pasta,
                ItemKind::Pizza,
                ItemKind::Pizza,
                ItemKind::Pizza,
                ItemKind::Pasta,
                ItemKind::Pasta,
            ]
        );
    }

    #[test]
    fn test_deserialized_items_cannot_claim_to_be_free() {
        let json = r#"{"kind":"PIZZA","toppings":["SEAFOOD","HAM"],"complimentary":true}"#;
        let mut order = order();
        for _ in 0..2 {
            let item: MenuItem = serde_json::from_str(json).unwrap();
            order.add_item(item);
        }

        assert_eq!(order.count_of(ItemKind::Pizza), 3);
        let free = order.items().iter().filter(|item| item.price().is_zero()).count();
        assert_eq!(free, 1);
        assert_eq!(order.total_cost(), Price::from_cents(2 * (1150 + 350 + 200)));
        assert_total_is_sum(&order);
    }

    #[test]
    fn test_render() {
        let mut order = order();
        order.add_item(Pizza::new(vec![PizzaTopping::Ham]));
        order.add_item(Pizza::plain());

        let expected = "Customer Name: Alice\n\
            Contact Number: 12345678\n\
            Delivery Address: 1 Main Street\n\
            \n\
            Pizza with toppings: [HAM]\nMeal Type: MEAT\nPrice: $13.50\n\
            Pizza with toppings: No Toppings\nMeal Type: VEGAN\nPrice: $11.50\n\
            Pizza with toppings: No Toppings\nMeal Type: VEGAN\nPrice: $0.00\n\
            You've received a FREE Pizza for ordering 2 or more pizzas!\n\
            Meal Type: MEAT\n\
            Total Cost: $25.00";
        assert_eq!(order.describe(), expected);
        assert_eq!(order.describe(), order.describe());
    }
}
