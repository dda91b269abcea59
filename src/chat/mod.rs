pub mod client;
pub mod handlers;
pub mod interpreter;
pub mod prompt;

pub use client::{ChatClient, ChatMessage, ChatRole};

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/chat", post(handlers::chat))
}
