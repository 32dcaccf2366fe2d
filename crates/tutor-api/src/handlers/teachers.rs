//! Explore-page handler.

use axum::Json;
use axum::extract::State;

use tutor_entity::teacher::Teacher;

use crate::state::AppState;

/// GET /api/teachers/explore
pub async fn explore(State(state): State<AppState>) -> Json<Vec<Teacher>> {
    Json(state.teacher_catalog.explore())
}
