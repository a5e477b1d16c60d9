use axum::routing::get;
use axum::Router;

use crate::handlers::stance;
use crate::state::AppState;

/// Routes mounted at `/stances`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stance::list))
}
