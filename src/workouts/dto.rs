use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One exercise within a workout. Set records are open maps (weight, reps,
/// duration, distance, completion flag, weight-unit tag, whatever the
/// client tracks) and pass through storage untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<Value>,
    #[serde(default)]
    pub notes: String,
    /// Seconds.
    #[serde(default)]
    pub rest_between_sets: u32,
}

/// Client-supplied workout body. Stale timestamps and unknown fields are
/// dropped by deserialization; the id, when present, is ignored on create
/// (storage assigns one).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    /// Minutes. Caller-supplied, never recomputed here.
    #[serde(default, deserialize_with = "crate::coerce::lenient_f64")]
    pub estimated_duration: f64,
}

/// The domain shape handed back to clients. Creation timestamps stay in
/// storage; this shape does not surface them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
    pub estimated_duration: f64,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}
