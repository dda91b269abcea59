//! Static exercise catalog. Public (no auth), read-only.

use axum::{routing::get, Json, Router};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightType {
    Kg,
    Lbs,
    Bodyweight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    pub description: String,
    pub muscle_groups: Vec<String>,
    pub default_weight_type: WeightType,
}

fn exercise(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    equipment: Option<&[&str]>,
    description: &str,
    muscle_groups: &[&str],
    default_weight_type: WeightType,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category,
        equipment: equipment.map(|e| e.iter().map(|s| s.to_string()).collect()),
        description: description.to_string(),
        muscle_groups: muscle_groups.iter().map(|s| s.to_string()).collect(),
        default_weight_type,
    }
}

lazy_static! {
    pub static ref EXERCISES: Vec<Exercise> = vec![
        exercise(
            "bench-press",
            "Bench Press",
            ExerciseCategory::Strength,
            Some(&["barbell", "bench"]),
            "A compound exercise that primarily targets the chest muscles",
            &["chest", "shoulders", "triceps"],
            WeightType::Kg,
        ),
        exercise(
            "squat",
            "Barbell Squat",
            ExerciseCategory::Strength,
            Some(&["barbell", "squat rack"]),
            "A compound lower body exercise that primarily targets the legs",
            &["quadriceps", "hamstrings", "glutes", "core"],
            WeightType::Kg,
        ),
        exercise(
            "deadlift",
            "Deadlift",
            ExerciseCategory::Strength,
            Some(&["barbell"]),
            "A compound exercise that targets multiple muscle groups",
            &["back", "hamstrings", "glutes", "core"],
            WeightType::Kg,
        ),
        exercise(
            "pull-up",
            "Pull-up",
            ExerciseCategory::Strength,
            Some(&["pull-up bar"]),
            "An upper body compound exercise",
            &["back", "biceps", "shoulders"],
            WeightType::Bodyweight,
        ),
        exercise(
            "running",
            "Running",
            ExerciseCategory::Cardio,
            None,
            "Cardiovascular exercise that can be done outdoors or on a treadmill",
            &["legs", "core"],
            WeightType::Bodyweight,
        ),
    ];
}

pub async fn list() -> Json<Vec<Exercise>> {
    Json(EXERCISES.clone())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/exercises", get(list))
}
