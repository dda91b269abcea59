//! Domain <-> storage-row conversion for meal plans, plus the two pure
//! conversions between the sequence and keyed meal shapes.
//!
//! Storage always holds the sequence form. Restore leaves meals in
//! sequence form; consumers that want the fixed six-slot keyed view (a
//! plan-builder screen, say) fold it with [`sequence_to_keyed`] — restore
//! never forces that conversion.

use std::collections::BTreeMap;

use crate::coerce;

use super::dto::{MealBody, MealEntry, MealPlanPayload, MealPlanRecord, MealType, Meals};
use super::repo::{MealPlanInsert, MealPlanRow};

/// Keyed -> sequence: each populated slot becomes an element tagged with
/// its key; absence markers (null slots) are skipped, not serialized.
pub fn keyed_to_sequence(meals: BTreeMap<MealType, Option<MealBody>>) -> Vec<MealEntry> {
    meals
        .into_iter()
        .filter_map(|(meal_type, body)| {
            body.map(|body| MealEntry {
                meal_type,
                name: body.name,
                time: body.time,
                foods: body.foods,
            })
        })
        .collect()
}

/// Sequence -> keyed: fold on the `type` tag, stripping it from the value.
/// A duplicated tag keeps the later element, mirroring a plain fold.
pub fn sequence_to_keyed(meals: Vec<MealEntry>) -> BTreeMap<MealType, MealBody> {
    meals
        .into_iter()
        .map(|entry| {
            (
                entry.meal_type,
                MealBody {
                    name: entry.name,
                    time: entry.time,
                    foods: entry.foods,
                },
            )
        })
        .collect()
}

pub fn prepare_for_storage(payload: MealPlanPayload) -> MealPlanInsert {
    let meals = match payload.meals {
        Meals::Sequence(sequence) => sequence,
        Meals::Keyed(keyed) => keyed_to_sequence(keyed),
    };
    MealPlanInsert {
        name: payload.name,
        description: payload.description,
        total_nutrition: payload.total_nutrition,
        meals,
    }
}

pub fn restore_from_storage(row: MealPlanRow) -> MealPlanRecord {
    MealPlanRecord {
        id: row.id,
        user_id: row.user_id,
        name: row.name,
        description: row.description,
        total_nutrition: row
            .total_nutrition
            .map(|block| coerce::nutrition_from_value(&block.0)),
        meals: row.meals.0,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Nutrition;
    use serde_json::json;
    use sqlx::types::Json;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn meal(meal_type: MealType, name: &str) -> MealEntry {
        MealEntry {
            meal_type,
            name: name.to_string(),
            time: "12:00".to_string(),
            foods: vec![],
        }
    }

    #[test]
    fn keyed_payload_flattens_to_sequence() {
        // Three of six slots populated, two explicit nulls; the storage
        // row must carry exactly the populated slots, tagged.
        let payload: MealPlanPayload = serde_json::from_value(json!({
            "name": "Cut Week",
            "totalNutrition": {"calories": 500, "protein": 40, "carbs": 50, "fat": 10},
            "meals": {
                "breakfast": {"name": "Oats", "time": "08:00", "foods": []},
                "morning-snack": null,
                "lunch": {"name": "Bowl", "time": "12:00", "foods": []},
                "dinner": {"name": "Salmon", "time": "19:00", "foods": []},
                "evening-snack": null
            }
        }))
        .unwrap();

        let insert = prepare_for_storage(payload);
        let types: Vec<MealType> = insert.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(
            types,
            vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
        assert_eq!(
            insert.total_nutrition,
            Some(Nutrition {
                calories: 500.0,
                protein: 40.0,
                carbs: 50.0,
                fat: 10.0
            })
        );
    }

    #[test]
    fn sequence_payload_passes_through() {
        let payload: MealPlanPayload = serde_json::from_value(json!({
            "name": "Bulk",
            "meals": [
                {"type": "lunch", "name": "Bowl", "time": "12:00", "foods": []},
                {"type": "breakfast", "name": "Oats", "time": "08:00", "foods": []}
            ]
        }))
        .unwrap();

        let insert = prepare_for_storage(payload);
        // sequence order is the client's order, untouched
        assert_eq!(insert.meals[0].meal_type, MealType::Lunch);
        assert_eq!(insert.meals[1].meal_type, MealType::Breakfast);
        assert!(insert.total_nutrition.is_none());
    }

    #[test]
    fn untagged_sequence_element_is_an_error() {
        let result = serde_json::from_value::<MealPlanPayload>(json!({
            "name": "Broken",
            "meals": [{"name": "Mystery", "time": "12:00", "foods": []}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn keyed_round_trip_preserves_exactly_the_populated_slots() {
        let mut keyed = BTreeMap::new();
        keyed.insert(
            MealType::Breakfast,
            Some(MealBody {
                name: "Oats".into(),
                time: "08:00".into(),
                foods: vec![],
            }),
        );
        keyed.insert(MealType::Lunch, None);
        keyed.insert(
            MealType::Dinner,
            Some(MealBody {
                name: "Salmon".into(),
                time: "19:00".into(),
                foods: vec![],
            }),
        );

        let back = sequence_to_keyed(keyed_to_sequence(keyed));
        let slots: Vec<MealType> = back.keys().copied().collect();
        assert_eq!(slots, vec![MealType::Breakfast, MealType::Dinner]);
    }

    #[test]
    fn duplicate_tags_keep_the_later_element() {
        let keyed = sequence_to_keyed(vec![
            meal(MealType::Lunch, "First"),
            meal(MealType::Lunch, "Second"),
        ]);
        assert_eq!(keyed[&MealType::Lunch].name, "Second");
    }

    #[test]
    fn payload_drops_stale_ids_and_timestamps() {
        let payload: MealPlanPayload = serde_json::from_value(json!({
            "id": "8f8b7e8a-7f6e-4b49-9a52-222222222222",
            "name": "Stale",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "created_at": "2024-01-01T00:00:00Z",
            "meals": []
        }))
        .unwrap();
        // the insert shape simply has nowhere to put them
        let insert = prepare_for_storage(payload);
        assert_eq!(insert.name, "Stale");
    }

    #[test]
    fn restore_renames_and_coerces() {
        let row = MealPlanRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Cut Week".into(),
            description: Some("low carb".into()),
            total_nutrition: Some(Json(json!({
                "calories": "500", "protein": 40, "carbs": 50, "fat": 10
            }))),
            meals: Json(vec![meal(MealType::Lunch, "Bowl")]),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };

        let value = serde_json::to_value(restore_from_storage(row)).unwrap();
        assert_eq!(value["totalNutrition"]["calories"], 500.0);
        assert!(value.get("total_nutrition").is_none());
        assert_eq!(value["createdAt"], "1970-01-01T00:00:00Z");
        // meals stay in sequence form on restore
        assert_eq!(value["meals"][0]["type"], "lunch");
    }

    #[test]
    fn restore_omits_absent_totals() {
        let row = MealPlanRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "No totals".into(),
            description: None,
            total_nutrition: None,
            meals: Json(vec![]),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let value = serde_json::to_value(restore_from_storage(row)).unwrap();
        assert!(value.get("totalNutrition").is_none());
    }

    #[test]
    fn round_trip_preserves_shared_fields() {
        let payload: MealPlanPayload = serde_json::from_value(json!({
            "name": "Leg Day Fuel",
            "description": "high protein",
            "totalNutrition": {"calories": 500, "protein": 40, "carbs": 50, "fat": 10},
            "meals": {
                "breakfast": null,
                "lunch": {
                    "name": "Bowl",
                    "time": "12:00",
                    "foods": [{
                        "name": "Rice",
                        "portion": 1.5,
                        "unit": "cup",
                        "nutrition": {"calories": 200, "protein": 4, "carbs": 45, "fat": 0}
                    }]
                },
                "dinner": null
            }
        }))
        .unwrap();

        let insert = prepare_for_storage(payload);
        assert_eq!(insert.meals.len(), 1);

        let row = MealPlanRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: insert.name.clone(),
            description: insert.description.clone(),
            total_nutrition: insert
                .total_nutrition
                .map(|n| Json(serde_json::to_value(n).unwrap())),
            meals: Json(insert.meals.clone()),
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        };
        let record = restore_from_storage(row);

        assert_eq!(record.name, "Leg Day Fuel");
        assert_eq!(record.description.as_deref(), Some("high protein"));
        assert_eq!(
            record.total_nutrition,
            Some(Nutrition {
                calories: 500.0,
                protein: 40.0,
                carbs: 50.0,
                fat: 10.0
            })
        );
        assert_eq!(record.meals[0].name, "Bowl");
        assert_eq!(record.meals[0].foods[0].nutrition.carbs, 45.0);
    }
}
