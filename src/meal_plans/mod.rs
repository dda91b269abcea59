pub mod dto;
pub mod handlers;
pub mod repo;
pub mod shape;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/meal-plans",
            get(handlers::list)
                .post(handlers::create)
                .put(handlers::update_missing_id)
                .delete(handlers::remove),
        )
        .route(
            "/api/meal-plans/:id",
            get(handlers::list).put(handlers::update).delete(handlers::remove),
        )
}
