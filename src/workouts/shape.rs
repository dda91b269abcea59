//! Domain <-> storage-row conversion for workouts.
//!
//! The only renamed field is `estimatedDuration` <-> `estimated_duration`;
//! exercises are already stored in their client shape. Storage assigns ids
//! and timestamps, so prepare drops both.

use super::dto::{WorkoutPayload, WorkoutRecord};
use super::repo::{WorkoutInsert, WorkoutRow};

pub fn prepare_for_storage(payload: WorkoutPayload) -> WorkoutInsert {
    WorkoutInsert {
        name: payload.name,
        description: payload.description,
        exercises: payload.exercises,
        estimated_duration: payload.estimated_duration,
    }
}

pub fn restore_from_storage(row: WorkoutRow) -> WorkoutRecord {
    WorkoutRecord {
        id: row.id,
        user_id: row.user_id,
        name: row.name,
        description: row.description,
        exercises: row.exercises.0,
        estimated_duration: row.estimated_duration,
    }
}
