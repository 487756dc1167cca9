pub mod department_pages;
pub mod departments;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /departments                       list, create
/// /departments/{id}                  get
/// /instructors                       list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/departments", departments::router())
        .route("/instructors", get(handlers::instructors::list))
}

/// Server-rendered pages, mounted at the root.
pub fn page_routes() -> Router<AppState> {
    Router::new().nest("/departments", department_pages::router())
}
