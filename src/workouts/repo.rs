use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::ExerciseEntry;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub exercises: Json<Vec<ExerciseEntry>>,
    pub estimated_duration: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Columns written on insert/update; ids and timestamps are storage-owned.
#[derive(Debug, Clone)]
pub struct WorkoutInsert {
    pub name: String,
    pub description: String,
    pub exercises: Vec<ExerciseEntry>,
    pub estimated_duration: f64,
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<WorkoutRow>> {
    let rows = sqlx::query_as::<_, WorkoutRow>(
        r#"
        SELECT id, user_id, name, description, exercises, estimated_duration, created_at, updated_at
        FROM workouts
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn insert(db: &PgPool, user_id: Uuid, workout: WorkoutInsert) -> anyhow::Result<WorkoutRow> {
    let row = sqlx::query_as::<_, WorkoutRow>(
        r#"
        INSERT INTO workouts (user_id, name, description, exercises, estimated_duration)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, description, exercises, estimated_duration, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&workout.name)
    .bind(&workout.description)
    .bind(Json(&workout.exercises))
    .bind(workout.estimated_duration)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Update scoped to (id, owner); when no row matches — absent or owned by
/// someone else — fall back to inserting a new row under the caller's id.
/// Update behaves as upsert-by-id on purpose; the miss is a recovery path,
/// not a failure.
pub async fn upsert(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    workout: WorkoutInsert,
) -> anyhow::Result<WorkoutRow> {
    let updated = sqlx::query_as::<_, WorkoutRow>(
        r#"
        UPDATE workouts
        SET name = $3, description = $4, exercises = $5, estimated_duration = $6, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, name, description, exercises, estimated_duration, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&workout.name)
    .bind(&workout.description)
    .bind(Json(&workout.exercises))
    .bind(workout.estimated_duration)
    .fetch_optional(db)
    .await?;

    if let Some(row) = updated {
        return Ok(row);
    }

    let row = sqlx::query_as::<_, WorkoutRow>(
        r#"
        INSERT INTO workouts (id, user_id, name, description, exercises, estimated_duration)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, name, description, exercises, estimated_duration, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&workout.name)
    .bind(&workout.description)
    .bind(Json(&workout.exercises))
    .bind(workout.estimated_duration)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Deleting a row that does not exist (or is not yours) affects zero rows
/// and is still success.
pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM workouts WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}
