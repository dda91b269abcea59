use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{types::Json, FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::Nutrition;

use super::dto::MealEntry;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Kept loose: rows written by earlier clients may carry string-typed
    /// numbers, which restore coerces.
    pub total_nutrition: Option<Json<Value>>,
    pub meals: Json<Vec<MealEntry>>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct MealPlanInsert {
    pub name: String,
    pub description: Option<String>,
    pub total_nutrition: Option<Nutrition>,
    pub meals: Vec<MealEntry>,
}

pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<MealPlanRow>> {
    let rows = sqlx::query_as::<_, MealPlanRow>(
        r#"
        SELECT id, user_id, name, description, total_nutrition, meals, created_at, updated_at
        FROM meal_plans
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn insert(db: &PgPool, user_id: Uuid, plan: MealPlanInsert) -> anyhow::Result<MealPlanRow> {
    let row = sqlx::query_as::<_, MealPlanRow>(
        r#"
        INSERT INTO meal_plans (user_id, name, description, total_nutrition, meals)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, description, total_nutrition, meals, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(plan.total_nutrition.map(Json))
    .bind(Json(&plan.meals))
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Update scoped to (id, owner) with insert-under-the-same-id fallback;
/// see the workouts repo for the policy. Not an error path.
pub async fn upsert(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
    plan: MealPlanInsert,
) -> anyhow::Result<MealPlanRow> {
    let updated = sqlx::query_as::<_, MealPlanRow>(
        r#"
        UPDATE meal_plans
        SET name = $3, description = $4, total_nutrition = $5, meals = $6, updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, name, description, total_nutrition, meals, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(plan.total_nutrition.map(Json))
    .bind(Json(&plan.meals))
    .fetch_optional(db)
    .await?;

    if let Some(row) = updated {
        return Ok(row);
    }

    let row = sqlx::query_as::<_, MealPlanRow>(
        r#"
        INSERT INTO meal_plans (id, user_id, name, description, total_nutrition, meals)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, name, description, total_nutrition, meals, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(plan.total_nutrition.map(Json))
    .bind(Json(&plan.meals))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM meal_plans WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}
