use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    auth::MaybeUser,
    error::{parse_body, ApiError},
    state::AppState,
};

use super::dto::{parse_date, DeleteRequest, ListQuery, ScheduleRecord, SchedulePayload};
use super::repo::{self, ScheduleInsert};

#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    user: MaybeUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ScheduleRecord>>, ApiError> {
    let user = user.require()?;
    let rows = repo::list_for_user(&state.db, user.id, query.limit, query.offset).await?;
    let records = rows
        .into_iter()
        .map(|row| row.into_record())
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Json(records))
}

#[instrument(skip(state, user, body))]
pub async fn create(
    State(state): State<AppState>,
    user: MaybeUser,
    Json(body): Json<Value>,
) -> Result<Json<ScheduleRecord>, ApiError> {
    let user = user.require()?;
    let payload: SchedulePayload = parse_body(body)?;
    let date = parse_date(&payload.date)?;
    let row = repo::insert(
        &state.db,
        user.id,
        ScheduleInsert {
            workout_id: payload.workout_id,
            date,
            recurrence: payload.recurrence,
            days_of_week: payload.days_of_week,
        },
    )
    .await?;
    info!(user_id = %user.id, schedule_id = %row.id, "workout scheduled");
    Ok(Json(row.into_record()?))
}

#[instrument(skip(state, user, body))]
pub async fn remove(
    State(state): State<AppState>,
    user: MaybeUser,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let user = user.require()?;
    let body: DeleteRequest = parse_body(body)?;
    let id = body
        .id
        .ok_or_else(|| ApiError::Validation("Schedule ID is required for deletion".into()))?;
    repo::delete(&state.db, id, user.id).await?;
    info!(user_id = %user.id, schedule_id = %id, "schedule deleted");
    Ok(Json(Value::Null))
}
