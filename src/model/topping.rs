//! Topping enums and their fixed price tables.
//!
//! Prices live in immutable tables next to the enums rather than in the
//! enums themselves, so a table can stay partial: a topping with no row
//! contributes nothing to the item's price.

use super::Price;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Toppings that can go on a [`Pizza`](super::Pizza). Any number may be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaTopping {
    Ham,
    Cheese,
    Pineapple,
    Mushrooms,
    Tomato,
    Seafood,
}

/// Sauces for a [`Pasta`](super::Pasta). At most one per pasta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PastaTopping {
    Bolognese,
    Marinara,
    Primavera,
    Tomato,
}

pub const PIZZA_TOPPING_PRICES: &[(PizzaTopping, Price)] = &[
    (PizzaTopping::Ham, Price::from_cents(200)),
    (PizzaTopping::Cheese, Price::from_cents(200)),
    (PizzaTopping::Mushrooms, Price::from_cents(200)),
    (PizzaTopping::Tomato, Price::from_cents(200)),
    (PizzaTopping::Pineapple, Price::from_cents(250)),
    (PizzaTopping::Seafood, Price::from_cents(350)),
];

pub const PASTA_TOPPING_PRICES: &[(PastaTopping, Price)] = &[
    (PastaTopping::Bolognese, Price::from_cents(520)),
    (PastaTopping::Marinara, Price::from_cents(680)),
    (PastaTopping::Primavera, Price::from_cents(520)),
    (PastaTopping::Tomato, Price::from_cents(400)),
];

/// Looks a topping up in a price table. Missing rows price at zero.
pub(crate) fn lookup<T: PartialEq>(table: &[(T, Price)], topping: &T) -> Price {
    table
        .iter()
        .find(|(candidate, _)| candidate == topping)
        .map(|(_, price)| *price)
        .unwrap_or(Price::ZERO)
}

impl PizzaTopping {
    pub const ALL: [PizzaTopping; 6] = [
        PizzaTopping::Ham,
        PizzaTopping::Cheese,
        PizzaTopping::Pineapple,
        PizzaTopping::Mushrooms,
        PizzaTopping::Tomato,
        PizzaTopping::Seafood,
    ];

    pub fn price(self) -> Price {
        lookup(PIZZA_TOPPING_PRICES, &self)
    }
}

impl PastaTopping {
    pub const ALL: [PastaTopping; 4] = [
        PastaTopping::Bolognese,
        PastaTopping::Marinara,
        PastaTopping::Primavera,
        PastaTopping::Tomato,
    ];

    pub fn price(self) -> Price {
        lookup(PASTA_TOPPING_PRICES, &self)
    }
}

impl Display for PizzaTopping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PizzaTopping::Ham => "HAM",
            PizzaTopping::Cheese => "CHEESE",
            PizzaTopping::Pineapple => "PINEAPPLE",
            PizzaTopping::Mushrooms => "MUSHROOMS",
            PizzaTopping::Tomato => "TOMATO",
            PizzaTopping::Seafood => "SEAFOOD",
        };
        f.write_str(label)
    }
}

impl Display for PastaTopping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PastaTopping::Bolognese => "BOLOGNESE",
            PastaTopping::Marinara => "MARINARA",
            PastaTopping::Primavera => "PRIMAVERA",
            PastaTopping::Tomato => "TOMATO",
        };
        f.write_str(label)
    }
}
