//! Credits handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::CreditsResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/credits
pub async fn get_credits(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CreditsResponse>> {
    let credits = state.credits_service.get_credits(&auth.handle).await?;
    Ok(Json(CreditsResponse { credits }))
}
