pub mod dto;
pub mod handlers;
pub mod repo;
pub mod shape;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/workouts",
            get(handlers::list)
                .post(handlers::create)
                .put(handlers::update_missing_id)
                .delete(handlers::remove),
        )
        // Reads ignore the id segment; both paths serve the full collection.
        .route(
            "/api/workouts/:id",
            get(handlers::list).put(handlers::update).delete(handlers::remove),
        )
}
