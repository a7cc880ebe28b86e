use super::food_item::{FoodItem, MenuItem, BASE_PRICE};
use super::topping::{lookup, PIZZA_TOPPING_PRICES};
use super::{FoodType, PizzaTopping, Price};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A pizza with any number of toppings.
///
/// Toppings are kept exactly as supplied, duplicates included, and each one
/// is charged. The price is
/// [`BASE_PRICE`] plus the sum of the topping prices, or zero for a
/// promotional pizza. Classification:
/// - MEAT if any topping is ham or seafood
/// - VEGETARIAN if cheese is present (and no meat)
/// - VEGAN otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PizzaPayload")]
pub struct Pizza {
    toppings: Vec<PizzaTopping>,
    #[serde(skip)]
    complimentary: bool,
    price: Price,
    classification: FoodType,
}

/// Wire shape of a pizza selection; derived fields are recomputed on arrival.
///
/// Only the toppings are read. A pizza built from a payload is always
/// charged; free pizzas come from the order's promotion alone.
#[derive(Deserialize)]
struct PizzaPayload {
    #[serde(default)]
    toppings: Vec<PizzaTopping>,
}

impl From<PizzaPayload> for Pizza {
    fn from(payload: PizzaPayload) -> Self {
        Pizza::new(payload.toppings)
    }
}

impl Pizza {
    pub fn new(toppings: Vec<PizzaTopping>) -> Self {
        let mut pizza = Self {
            toppings,
            complimentary: false,
            price: Price::ZERO,
            classification: FoodType::Vegan,
        };
        pizza.compute_price();
        pizza.compute_classification();
        pizza
    }

    /// A pizza with no toppings.
    pub fn plain() -> Self {
        Self::new(Vec::new())
    }

    pub fn toppings(&self) -> &[PizzaTopping] {
        &self.toppings
    }

    /// True for a pizza handed out by the promotion.
    pub fn is_complimentary(&self) -> bool {
        self.complimentary
    }

    pub(crate) fn into_complimentary(mut self) -> Self {
        self.complimentary = true;
        self.compute_price();
        self
    }
}

impl FoodItem for Pizza {
    fn price(&self) -> Price {
        self.price
    }

    fn classification(&self) -> FoodType {
        self.classification
    }

    fn compute_price(&mut self) {
        if self.complimentary {
            self.price = Price::ZERO;
            return;
        }
        self.price = BASE_PRICE
            + self
                .toppings
                .iter()
                .map(|topping| lookup(PIZZA_TOPPING_PRICES, topping))
                .sum::<Price>();
    }

    fn compute_classification(&mut self) {
        let mut has_cheese = false;
        for topping in &self.toppings {
            match topping {
                PizzaTopping::Ham | PizzaTopping::Seafood => {
                    self.classification = FoodType::Meat;
                    return;
                }
                PizzaTopping::Cheese => has_cheese = true,
                _ => {}
            }
        }
        self.classification = if has_cheese {
            FoodType::Vegetarian
        } else {
            FoodType::Vegan
        };
    }

    fn generate_free_item(&self) -> MenuItem {
        MenuItem::Pizza(Pizza::new(self.toppings.clone()))
    }
}

impl Display for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Pizza with toppings: ")?;
        if self.toppings.is_empty() {
            f.write_str("No Toppings")?;
        } else {
            let names: Vec<String> = self.toppings.iter().map(ToString::to_string).collect();
            write!(f, "[{}]", names.join(", "))?;
        }
        write!(f, "\nMeal Type: {}\nPrice: ${}", self.classification, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pizza_is_vegan_base_price() {
        let pizza = Pizza::plain();
        assert_eq!(pizza.price(), Price::from_cents(1150));
        assert_eq!(pizza.classification(), FoodType::Vegan);
    }

    #[test]
    fn test_price_adds_every_topping() {
        let pizza = Pizza::new(vec![PizzaTopping::Pineapple, PizzaTopping::Seafood]);
        assert_eq!(pizza.price(), Price::from_cents(1150 + 250 + 350));
    }

    #[test]
    fn test_duplicate_toppings_are_charged_twice() {
        let pizza = Pizza::new(vec![PizzaTopping::Cheese, PizzaTopping::Cheese]);
        assert_eq!(pizza.toppings().len(), 2);
        assert_eq!(pizza.price(), Price::from_cents(1550));
    }

    #[test]
    fn test_meat_wins_over_cheese() {
        let pizza = Pizza::new(vec![PizzaTopping::Cheese, PizzaTopping::Ham]);
        assert_eq!(pizza.classification(), FoodType::Meat);

        let pizza = Pizza::new(vec![PizzaTopping::Seafood, PizzaTopping::Cheese]);
        assert_eq!(pizza.classification(), FoodType::Meat);
    }

    #[test]
    fn test_cheese_without_meat_is_vegetarian() {
        let pizza = Pizza::new(vec![PizzaTopping::Mushrooms, PizzaTopping::Cheese]);
        assert_eq!(pizza.classification(), FoodType::Vegetarian);

        let pizza = Pizza::new(vec![PizzaTopping::Tomato, PizzaTopping::Pineapple]);
        assert_eq!(pizza.classification(), FoodType::Vegan);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut pizza = Pizza::new(vec![PizzaTopping::Ham, PizzaTopping::Tomato]);
        let before = (pizza.price(), pizza.classification());
        pizza.compute_price();
        pizza.compute_classification();
        pizza.compute_price();
        assert_eq!((pizza.price(), pizza.classification()), before);
    }

    #[test]
    fn test_complimentary_stays_free_on_recompute() {
        let mut pizza = Pizza::new(vec![PizzaTopping::Seafood]).into_complimentary();
        assert_eq!(pizza.price(), Price::ZERO);
        pizza.compute_price();
        assert_eq!(pizza.price(), Price::ZERO);
        assert!(pizza.is_complimentary());
    }

    #[test]
    fn test_generated_free_item_copies_toppings() {
        let pizza = Pizza::new(vec![PizzaTopping::Ham, PizzaTopping::Cheese]);
        match pizza.generate_free_item() {
            MenuItem::Pizza(free) => {
                assert_eq!(free.toppings(), pizza.toppings());
                assert_eq!(free.classification(), FoodType::Meat);
            }
            other => panic!("expected a pizza, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_is_always_charged() {
        let json = r#"{"toppings":["SEAFOOD","HAM"],"complimentary":true}"#;
        let pizza: Pizza = serde_json::from_str(json).unwrap();
        assert!(!pizza.is_complimentary());
        assert_eq!(pizza.price(), Price::from_cents(1150 + 350 + 200));
        assert_eq!(pizza.classification(), FoodType::Meat);
    }

    #[test]
    fn test_free_pizza_serializes_without_flag() {
        let free = Pizza::plain().into_complimentary();
        let json = serde_json::to_value(&free).unwrap();
        assert!(json.get("complimentary").is_none());
        let back: Pizza = serde_json::from_value(json).unwrap();
        assert_eq!(back.price(), Price::from_cents(1150));
    }

    #[test]
    fn test_render() {
        let pizza = Pizza::new(vec![PizzaTopping::Ham, PizzaTopping::Cheese]);
        assert_eq!(
            pizza.to_string(),
            "Pizza with toppings: [HAM, CHEESE]\nMeal Type: MEAT\nPrice: $15.50"
        );
        assert_eq!(
            Pizza::plain().to_string(),
            "Pizza with toppings: No Toppings\nMeal Type: VEGAN\nPrice: $11.50"
        );
    }
}
