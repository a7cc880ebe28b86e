use super::food_item::{FoodItem, MenuItem, BASE_PRICE};
use super::topping::{lookup, PASTA_TOPPING_PRICES};
use super::{FoodType, PastaTopping, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A pasta with at most one topping.
///
/// No topping or TOMATO is VEGAN, BOLOGNESE and MARINARA are MEAT,
/// PRIMAVERA is VEGETARIAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PastaPayload")]
pub struct Pasta {
    topping: Option<PastaTopping>,
    #[serde(skip)]
    complimentary: bool,
    price: Price,
    classification: FoodType,
}

/// Only the topping is read; a pasta built from a payload is always charged.
#[derive(Deserialize)]
struct PastaPayload {
    topping: Option<PastaTopping>,
}

impl From<PastaPayload> for Pasta {
    fn from(payload: PastaPayload) -> Self {
        Pasta::new(payload.topping)
    }
}

impl Pasta {
    pub fn new(topping: Option<PastaTopping>) -> Self {
        let mut pasta = Self {
            topping,
            complimentary: false,
            price: Price::ZERO,
            classification: FoodType::Vegan,
        };
        pasta.compute_price();
        pasta.compute_classification();
        pasta
    }

    pub fn plain() -> Self {
        Self::new(None)
    }

    pub fn topping(&self) -> Option<PastaTopping> {
        self.topping
    }

    pub fn is_complimentary(&self) -> bool {
        self.complimentary
    }

    pub(crate) fn into_complimentary(mut self) -> Self {
        self.complimentary = true;
        self.compute_price();
        self
    }
}

impl FoodItem for Pasta {
    fn price(&self) -> Price {
        self.price
    }

    fn classification(&self) -> FoodType {
        self.classification
    }

    fn compute_price(&mut self) {
        self.price = if self.complimentary {
            Price::ZERO
        } else {
            let topping = self
                .topping
                .map(|topping| lookup(PASTA_TOPPING_PRICES, &topping))
                .unwrap_or(Price::ZERO);
            BASE_PRICE + topping
        };
    }

    fn compute_classification(&mut self) {
        self.classification = match self.topping {
            None | Some(PastaTopping::Tomato) => FoodType::Vegan,
            Some(PastaTopping::Bolognese) | Some(PastaTopping::Marinara) => FoodType::Meat,
            Some(PastaTopping::Primavera) => FoodType::Vegetarian,
        };
    }

    /// The promotional pasta never carries a topping.
    fn generate_free_item(&self) -> MenuItem {
        MenuItem::Pasta(Pasta::plain())
    }
}

impl Display for Pasta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.topping {
            Some(topping) => write!(f, "Pasta with topping: {topping}")?,
            None => f.write_str("Pasta with topping: No Topping")?,
        }
        write!(f, "\nMeal Type: {}\nPrice: ${}", self.classification, self.price)
    }
}
