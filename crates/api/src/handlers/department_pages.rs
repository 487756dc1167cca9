//! HTML page handlers for departments.
//!
//! ```text
//! GET  /departments          -> index
//! GET  /departments/create   -> new_form
//! POST /departments/create   -> create
//! ```

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::error::PageResult;
use crate::forms::{validate_bound, DepartmentForm};
use crate::state::AppState;
use crate::views;

/// GET /departments
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let departments = state.departments.list_summaries().await?;
    Ok(Html(views::department_index(&departments)))
}

/// GET /departments/create
pub async fn new_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    let instructors = state.instructors.list_instructors().await?;
    Ok(Html(views::create_department_form(
        &DepartmentForm::default(),
        &instructors,
        &[],
    )))
}

/// POST /departments/create
///
/// A rejected submission re-renders the form with its values and messages;
/// nothing is dispatched. A successful one redirects to the listing. Handler
/// failures render the error page (500, or 503 when cancelled).
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<DepartmentForm>,
) -> PageResult<Response> {
    let (command, binding) = form.bind();

    let errors = match validate_bound(command, binding) {
        Ok(valid) => {
            let id = state
                .create_department
                .handle(valid, state.shutdown.child_token())
                .await?;
            tracing::debug!(department_id = id, "Redirecting to department list");
            return Ok(Redirect::to("/departments").into_response());
        }
        Err(errors) => errors,
    };

    tracing::debug!(error_count = errors.len(), "Department form rejected");
    let instructors = state.instructors.list_instructors().await?;
    Ok(Html(views::create_department_form(&form, &instructors, &errors)).into_response())
}
