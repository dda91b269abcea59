use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::Nutrition;

/// The fixed meal-slot enumeration. Variant order is the order of the day,
/// which makes keyed->sequence conversion deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealType {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    EveningSnack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    #[serde(default, deserialize_with = "crate::coerce::lenient_f64")]
    pub portion: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "crate::coerce::lenient_nutrition")]
    pub nutrition: Nutrition,
}

/// A meal in sequence form: the slot tag travels on the element itself.
/// An element with no tag does not deserialize — that is the error, there
/// is no untagged meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

/// A meal in keyed form: the slot tag is the map key, so the value carries
/// everything but the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealBody {
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

/// The two interchangeable shapes of a plan's meals collection. Clients
/// send either; storage always holds the sequence form. `None` values in
/// the keyed form are explicit absence markers for empty slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Meals {
    Sequence(Vec<MealEntry>),
    Keyed(BTreeMap<MealType, Option<MealBody>>),
}

impl Default for Meals {
    fn default() -> Self {
        Meals::Sequence(Vec::new())
    }
}

/// Client-supplied meal-plan body. Ids, stale timestamps and the snake_case
/// totals spelling are dropped at this boundary; totals are strictly
/// coerced so a non-numeric field fails before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::coerce::opt_strict_nutrition")]
    pub total_nutrition: Option<Nutrition>,
    #[serde(default)]
    pub meals: Meals,
}

/// The domain shape handed back to clients: camelCase totals and
/// timestamps, meals in sequence form. Callers needing the keyed view fold
/// it themselves with [`super::shape::sequence_to_keyed`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRecord {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_nutrition: Option<Nutrition>,
    pub meals: Vec<MealEntry>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}
