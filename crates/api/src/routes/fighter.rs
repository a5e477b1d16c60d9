//! Route definitions for the `/fighters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::fighter;
use crate::state::AppState;

/// Routes mounted at `/fighters`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fighter::list).post(fighter::create))
        .route(
            "/{id}",
            get(fighter::get_by_id)
                .patch(fighter::update)
                .delete(fighter::delete),
        )
}
