//! Liveness and readiness report at `GET /health`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use ufc_db::repositories::StanceRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and the stance catalog is populated,
    /// `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Rows in the stance catalog; `null` when the count query fails.
    pub stance_count: Option<i64>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = ufc_db::health_check(&state.pool).await.is_ok();
    let stance_count = match StanceRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Stance catalog count failed");
            None
        }
    };

    let ready = db_healthy && stance_count.is_some_and(|n| n > 0);

    Json(HealthResponse {
        status: if ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        stance_count,
    })
}

/// Root-level health route; not nested under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
