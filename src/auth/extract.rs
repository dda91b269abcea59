//! Request extractor resolving the bearer token to a user-or-null.
//!
//! Unlike a rejecting extractor, `MaybeUser` always succeeds; handlers that
//! need an authenticated user call `require()` and surface AUTH_REQUIRED
//! themselves. Public routes simply don't extract it.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{error::ApiError, state::AppState};

use super::identity::AuthenticatedUser;

pub struct MaybeUser(pub Option<AuthenticatedUser>);

impl MaybeUser {
    pub fn require(self) -> Result<AuthenticatedUser, ApiError> {
        self.0.ok_or(ApiError::AuthRequired)
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(MaybeUser(None));
        };

        let token = header.strip_prefix("Bearer ").unwrap_or(header);
        let state = AppState::from_ref(state);
        let user = state.auth.resolve(token).await;
        Ok(MaybeUser(user))
    }
}
