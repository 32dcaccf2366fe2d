//! `AuthUser` extractor: runs the identity gate on the request's session credential.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tutor_service::RequestContext;

use crate::cookie::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers, &state.config.auth.session_cookie.name);

        let ctx = state.auth_service.authenticate(token.as_deref()).await?;

        Ok(AuthUser(ctx))
    }
}
