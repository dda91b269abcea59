//! Nutrition totals for planner meals.
//!
//! A planner meal is a list of (food item, quantity-in-servings) pairs; a
//! serving is the food's declared serving size in grams or milliliters and
//! nutrition facts are declared per 100 g/ml.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Protein,
    Carbs,
    Fats,
    Vegetables,
    Fruits,
    Dairy,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    /// Grams or milliliters per serving.
    pub serving_size: f64,
    pub serving_unit: String,
    #[serde(default, deserialize_with = "crate::coerce::lenient_nutrition")]
    pub nutrition_per_100g: Nutrition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub id: String,
    pub food_item: FoodItem,
    /// Number of servings.
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// HH:MM time of day.
    pub time: String,
    #[serde(default)]
    pub items: Vec<MealItem>,
}

/// Sum nutrition across all items of all meals.
///
/// Accumulation is exact; rounding (half-up) happens once on the final
/// total so intermediate sums do not compound rounding error. An empty
/// meal list yields the zero vector.
pub fn calculate_total_nutrition(meals: &[Meal]) -> Nutrition {
    let mut total = Nutrition::default();
    for meal in meals {
        for item in &meal.items {
            let multiplier = item.quantity * (item.food_item.serving_size / 100.0);
            let per_100 = &item.food_item.nutrition_per_100g;
            total.calories += per_100.calories * multiplier;
            total.protein += per_100.protein * multiplier;
            total.carbs += per_100.carbs * multiplier;
            total.fat += per_100.fat * multiplier;
        }
    }
    Nutrition {
        calories: total.calories.round(),
        protein: total.protein.round(),
        carbs: total.carbs.round(),
        fat: total.fat.round(),
    }
}
