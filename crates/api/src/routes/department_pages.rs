//! Route definitions for the department HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::department_pages;
use crate::state::AppState;

/// Routes mounted at `/departments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(department_pages::index))
        .route(
            "/create",
            get(department_pages::new_form).post(department_pages::create),
        )
}
