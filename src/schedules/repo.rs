use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::dto::{DayOfWeek, Recurrence, ScheduleRecord, DATE_FORMAT};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScheduleRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub date: Date,
    pub recurrence: String,
    pub days_of_week: Option<Json<Vec<DayOfWeek>>>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ScheduleRow {
    pub fn into_record(self) -> anyhow::Result<ScheduleRecord> {
        let recurrence = Recurrence::parse(&self.recurrence)
            .ok_or_else(|| anyhow!("unknown recurrence in storage: {}", self.recurrence))?;
        let date = self
            .date
            .format(DATE_FORMAT)
            .map_err(|e| anyhow!("unformattable schedule date: {e}"))?;
        Ok(ScheduleRecord {
            id: self.id,
            workout_id: self.workout_id,
            date,
            recurrence,
            days_of_week: self.days_of_week.map(|d| d.0),
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleInsert {
    pub workout_id: Uuid,
    pub date: Date,
    pub recurrence: Recurrence,
    pub days_of_week: Option<Vec<DayOfWeek>>,
}

pub async fn list_for_user(
    db: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<ScheduleRow>> {
    let rows = sqlx::query_as::<_, ScheduleRow>(
        r#"
        SELECT id, user_id, workout_id, date, recurrence, days_of_week, created_at, updated_at
        FROM workout_schedules
        WHERE user_id = $1
        ORDER BY date ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn insert(db: &PgPool, user_id: Uuid, schedule: ScheduleInsert) -> anyhow::Result<ScheduleRow> {
    let row = sqlx::query_as::<_, ScheduleRow>(
        r#"
        INSERT INTO workout_schedules (user_id, workout_id, date, recurrence, days_of_week)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, workout_id, date, recurrence, days_of_week, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(schedule.workout_id)
    .bind(schedule.date)
    .bind(schedule.recurrence.as_str())
    .bind(schedule.days_of_week.map(Json))
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM workout_schedules WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}
