use std::net::SocketAddr;

use axum::{http::StatusCode, Json, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{catalog, chat, meal_plans, schedules, workouts};

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "message": "Not Found" } })),
    )
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(catalog::router())
        .merge(workouts::router())
        .merge(meal_plans::router())
        .merge(schedules::router())
        .merge(chat::router())
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    const TOKEN: &str = "test-token";

    fn app() -> Router {
        build_app(AppState::fake(TOKEN, Uuid::new_v4()))
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn unknown_path_is_enveloped_404() {
        let (status, body) = send(request(Method::GET, "/api/nope", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Not Found");
    }

    #[tokio::test]
    async fn wrong_verb_on_known_path_is_405() {
        let (status, _) = send(request(Method::GET, "/api/chat", None, None)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let (status, _) = send(request(Method::POST, "/api/exercises", None, None)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn exercises_are_public() {
        let (status, body) = send(request(Method::GET, "/api/exercises", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["id"], "bench-press");
    }

    #[tokio::test]
    async fn protected_routes_require_a_user() {
        for uri in ["/api/workouts", "/api/meal-plans", "/api/workout-schedules"] {
            let (status, body) = send(request(Method::GET, uri, None, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
            assert_eq!(body["error"]["message"], "Authentication required");
        }
    }

    #[tokio::test]
    async fn bad_token_is_unauthorized_too() {
        let (status, _) = send(request(Method::GET, "/api/workouts", Some("wrong"), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn id_routes_match_with_path_parameters() {
        // /api/workouts/{id} resolves for an arbitrary segment; the auth
        // check fires before anything touches the parameter.
        let (status, _) = send(request(Method::GET, "/api/workouts/abc", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn put_without_id_is_a_validation_error() {
        let (status, body) = send(request(
            Method::PUT,
            "/api/workouts",
            Some(TOKEN),
            Some(serde_json::json!({"name": "x"})),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Workout ID is required for updates");

        let (status, body) = send(request(
            Method::PUT,
            "/api/meal-plans",
            Some(TOKEN),
            Some(serde_json::json!({"name": "x"})),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Meal Plan ID is required for updates");
    }

    #[tokio::test]
    async fn delete_without_id_is_a_validation_error() {
        let (status, body) = send(request(
            Method::DELETE,
            "/api/workouts",
            Some(TOKEN),
            Some(serde_json::json!({})),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Workout ID is required for deletion"
        );
    }

    #[tokio::test]
    async fn invalid_update_id_is_a_validation_error() {
        let (status, body) = send(request(
            Method::PUT,
            "/api/workouts/not-a-uuid",
            Some(TOKEN),
            Some(serde_json::json!({"name": "x", "estimatedDuration": 1})),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid workout id"));
    }

    #[tokio::test]
    async fn chat_without_credentials_is_a_400_upstream_error() {
        let (status, body) = send(request(
            Method::POST,
            "/api/chat",
            Some(TOKEN),
            Some(serde_json::json!({"message": "hello"})),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("not configured"));
    }

    #[tokio::test]
    async fn schedule_create_validates_the_date() {
        let (status, body) = send(request(
            Method::POST,
            "/api/workout-schedules",
            Some(TOKEN),
            Some(serde_json::json!({
                "workoutId": Uuid::new_v4(),
                "date": "next tuesday",
                "recurrence": "once"
            })),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("invalid date"));
    }
}
