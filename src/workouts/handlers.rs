use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::MaybeUser,
    error::{parse_body, ApiError},
    state::AppState,
};

use super::dto::{DeleteRequest, WorkoutPayload, WorkoutRecord};
use super::{repo, shape};

#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    user: MaybeUser,
) -> Result<Json<Vec<WorkoutRecord>>, ApiError> {
    let user = user.require()?;
    let rows = repo::list_for_user(&state.db, user.id).await?;
    Ok(Json(rows.into_iter().map(shape::restore_from_storage).collect()))
}

#[instrument(skip(state, user, body))]
pub async fn create(
    State(state): State<AppState>,
    user: MaybeUser,
    Json(body): Json<Value>,
) -> Result<Json<WorkoutRecord>, ApiError> {
    let user = user.require()?;
    let payload: WorkoutPayload = parse_body(body)?;
    let row = repo::insert(&state.db, user.id, shape::prepare_for_storage(payload)).await?;
    info!(user_id = %user.id, workout_id = %row.id, "workout created");
    Ok(Json(shape::restore_from_storage(row)))
}

#[instrument(skip(state, user, body))]
pub async fn update(
    State(state): State<AppState>,
    user: MaybeUser,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<WorkoutRecord>, ApiError> {
    let user = user.require()?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::Validation(format!("invalid workout id: {id}")))?;
    let payload: WorkoutPayload = parse_body(body)?;
    let row = repo::upsert(&state.db, id, user.id, shape::prepare_for_storage(payload)).await?;
    info!(user_id = %user.id, workout_id = %row.id, "workout saved");
    Ok(Json(shape::restore_from_storage(row)))
}

/// PUT on the collection path carries no id to update.
#[instrument(skip(user))]
pub async fn update_missing_id(user: MaybeUser) -> Result<Json<WorkoutRecord>, ApiError> {
    user.require()?;
    Err(ApiError::Validation("Workout ID is required for updates".into()))
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
        .ok_or_else(|| ApiError::Validation("Workout ID is required for deletion".into()))?;
    repo::delete(&state.db, id, user.id).await?;
    info!(user_id = %user.id, workout_id = %id, "workout deleted");
    Ok(Json(Value::Null))
}
