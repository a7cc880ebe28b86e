//! The shared pricing / classification contract and the [`MenuItem`] union.

use super::{FoodType, Pasta, Pizza, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Price of any item before toppings.
pub const BASE_PRICE: Price = Price::from_cents(1150);

/// Number of same-kind items that earns one free item.
pub const FREE_ITEM_THRESHOLD: usize = 2;

/// Capabilities every item on the menu provides.
///
/// Implementors derive price and classification from their own toppings and
/// recompute both eagerly at construction. Both recomputations are idempotent.
pub trait FoodItem {
    /// Current price of the item (zero for a free item).
    fn price(&self) -> Price;

    /// Dietary classification derived from the toppings.
    fn classification(&self) -> FoodType;

    /// Re-derives the price from [`BASE_PRICE`] and the topping price table.
    fn compute_price(&mut self);

    /// Re-derives the classification from the toppings.
    fn compute_classification(&mut self);

    /// How many free items `purchased` items of this kind earn.
    fn free_item_count(&self, purchased: usize) -> usize {
        if purchased >= FREE_ITEM_THRESHOLD {
            1
        } else {
            0
        }
    }

    /// A new item of the same kind, as handed out by the promotion.
    fn generate_free_item(&self) -> MenuItem;
}

/// The two kinds of item the shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Pizza,
    Pasta,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Pizza => f.write_str("Pizza"),
            ItemKind::Pasta => f.write_str("Pasta"),
        }
    }
}

/// Any item that can be placed on an [`Order`](super::Order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuItem {
    Pizza(Pizza),
    Pasta(Pasta),
}

impl MenuItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            MenuItem::Pizza(_) => ItemKind::Pizza,
            MenuItem::Pasta(_) => ItemKind::Pasta,
        }
    }

    /// The plain, topping-less item of the given kind.
    pub fn plain(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Pizza => MenuItem::Pizza(Pizza::plain()),
            ItemKind::Pasta => MenuItem::Pasta(Pasta::plain()),
        }
    }

    /// Same item with its price forced to zero.
    pub(crate) fn into_complimentary(self) -> Self {
        match self {
            MenuItem::Pizza(pizza) => MenuItem::Pizza(pizza.into_complimentary()),
            MenuItem::Pasta(pasta) => MenuItem::Pasta(pasta.into_complimentary()),
        }
    }
}

impl FoodItem for MenuItem {
    fn price(&self) -> Price {
        match self {
            MenuItem::Pizza(pizza) => pizza.price(),
            MenuItem::Pasta(pasta) => pasta.price(),
        }
    }

    fn classification(&self) -> FoodType {
        match self {
            MenuItem::Pizza(pizza) => pizza.classification(),
            MenuItem::Pasta(pasta) => pasta.classification(),
        }
    }

    fn compute_price(&mut self) {
        match self {
            MenuItem::Pizza(pizza) => pizza.compute_price(),
            MenuItem::Pasta(pasta) => pasta.compute_price(),
        }
    }

    fn compute_classification(&mut self) {
        match self {
            MenuItem::Pizza(pizza) => pizza.compute_classification(),
            MenuItem::Pasta(pasta) => pasta.compute_classification(),
        }
    }

    fn free_item_count(&self, purchased: usize) -> usize {
        match self {
            MenuItem::Pizza(pizza) => pizza.free_item_count(purchased),
            MenuItem::Pasta(pasta) => pasta.free_item_count(purchased),
        }
    }

    fn generate_free_item(&self) -> MenuItem {
        match self {
            MenuItem::Pizza(pizza) => pizza.generate_free_item(),
            MenuItem::Pasta(pasta) => pasta.generate_free_item(),
        }
    }
}

impl From<Pizza> for MenuItem {
    fn from(pizza: Pizza) -> Self {
        MenuItem::Pizza(pizza)
    }
}

impl From<Pasta> for MenuItem {
    fn from(pasta: Pasta) -> Self {
        MenuItem::Pasta(pasta)
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuItem::Pizza(pizza) => pizza.fmt(f),
            MenuItem::Pasta(pasta) => pasta.fmt(f),
        }
    }
}
