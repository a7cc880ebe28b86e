use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Dietary classification of a single item or of a whole order.
///
/// Variants are declared in ascending priority, so `Ord` follows the
/// MEAT > VEGETARIAN > VEGAN rule: combining classifications is `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    /// Contains no animal products.
    #[default]
    Vegan,
    /// No meat, but may contain cheese or other animal products.
    Vegetarian,
    /// Contains meat or seafood.
    Meat,
}

impl Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FoodType::Vegan => "VEGAN",
            FoodType::Vegetarian => "VEGETARIAN",
            FoodType::Meat => "MEAT",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(FoodType::Meat > FoodType::Vegetarian);
        assert!(FoodType::Vegetarian > FoodType::Vegan);
        assert_eq!(FoodType::Vegan.max(FoodType::Meat), FoodType::Meat);
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(FoodType::Vegetarian.to_string(), "VEGETARIAN");
        assert_eq!(FoodType::default(), FoodType::Vegan);
    }
}
