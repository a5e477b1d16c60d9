pub mod fighter;
pub mod health;
pub mod stance;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /fighters                  create, list
/// /fighters/{id}             get, patch, delete
/// /stances                   list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/fighters", fighter::router())
        .nest("/stances", stance::router())
}
