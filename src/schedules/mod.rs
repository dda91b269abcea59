pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/workout-schedules",
            get(handlers::list).post(handlers::create).delete(handlers::remove),
        )
        .route("/api/workout-schedules/:id", delete(handlers::remove))
}
