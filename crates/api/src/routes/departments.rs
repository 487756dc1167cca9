//! Route definitions for the `/departments` JSON resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::departments;
use crate::state::AppState;

/// Routes mounted at `/api/v1/departments`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(departments::list).post(departments::create))
        .route("/{id}", get(departments::get_by_id))
}
