//! Handlers for the `/stances` resource.

use axum::extract::State;
use axum::Json;
use ufc_db::models::stance::Stance;
use ufc_db::repositories::StanceRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/stances
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Stance>>> {
    let stances = StanceRepo::list(&state.pool).await?;
    Ok(Json(stances))
}
