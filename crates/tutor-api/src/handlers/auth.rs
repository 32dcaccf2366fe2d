//! Auth handlers: login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use tutor_core::error::AppError;
use tutor_service::auth::MISSING_CREDENTIALS;

use crate::cookie::{expired_session_cookie, session_cookie, session_token};
use crate::dto::request::LoginRequest;
use crate::dto::response::{MeResponse, SuccessResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload.map_err(|rejection| {
        AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let Some((email, password)) = req.credentials() else {
        return Err(AppError::validation(MISSING_CREDENTIALS).into());
    };

    let session = state.auth_service.login(email, password).await?;

    let cookie_config = &state.config.auth.session_cookie;
    let max_age = session
        .expires_in_seconds()
        .unwrap_or(cookie_config.max_age_seconds);
    let jar = CookieJar::new().add(session_cookie(
        cookie_config,
        &session.access_token,
        max_age,
    ));

    Ok((jar, Json(SuccessResponse::ok())))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let cookie_config = &state.config.auth.session_cookie;
    let token = session_token(&headers, &cookie_config.name);

    state.auth_service.logout(token.as_deref()).await?;

    let jar = CookieJar::new().add(expired_session_cookie(cookie_config));
    Ok((jar, Json(SuccessResponse::ok())))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: auth.user_id().to_string(),
        email: auth.identity.email.clone(),
    })
}
