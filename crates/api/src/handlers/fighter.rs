//! Handlers for the `/fighters` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use ufc_core::error::CoreError;
use ufc_core::stance::is_known_stance;
use ufc_core::types::DbId;
use ufc_db::models::fighter::{
    CreateFighter, FighterReadDetailed, FighterReadSimple, UpdateFighter,
};
use ufc_db::repositories::FighterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub ok: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Fighter",
        id,
    })
}

/// Unknown stances are dropped by the repository, not rejected. Leave a
/// trace of it so the silent drop can be diagnosed.
fn log_dropped_stance(stance: Option<&str>) {
    if let Some(name) = stance.filter(|s| !is_known_stance(s)) {
        tracing::debug!(stance = %name, "Unknown stance ignored");
    }
}

/// POST /api/v1/fighters
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateFighter>, JsonRejection>,
) -> AppResult<(StatusCode, Json<FighterReadSimple>)> {
    let Json(input) = payload?;
    let new_fighter = input.normalize()?;
    log_dropped_stance(new_fighter.stance.as_deref());

    let fighter = FighterRepo::create(&state.pool, &new_fighter).await?;

    tracing::info!(
        fighter_id = fighter.id,
        full_name = %fighter.full_name(),
        "Fighter created"
    );

    Ok((StatusCode::CREATED, Json(FighterReadSimple::created(&fighter))))
}

/// GET /api/v1/fighters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FighterReadDetailed>>> {
    let fighters = FighterRepo::list(&state.pool).await?;
    Ok(Json(fighters.iter().map(FighterReadDetailed::from).collect()))
}

/// GET /api/v1/fighters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<FighterReadDetailed>> {
    let Path(id) = path?;
    let fighter = FighterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(FighterReadDetailed::from(&fighter)))
}

/// PATCH /api/v1/fighters/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateFighter>, JsonRejection>,
) -> AppResult<Json<FighterReadSimple>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let changes = input.normalize()?;
    log_dropped_stance(changes.stance.as_deref());

    let fighter = FighterRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(fighter_id = fighter.id, "Fighter updated");

    Ok(Json(FighterReadSimple::updated(&fighter)))
}

/// DELETE /api/v1/fighters/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DeleteAck>> {
    let Path(id) = path?;
    if !FighterRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(fighter_id = id, "Fighter deleted");

    Ok(Json(DeleteAck { ok: true }))
}
