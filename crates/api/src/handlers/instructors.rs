//! Handlers for the `/instructors` resource.

use axum::extract::State;
use axum::Json;
use campus_core::instructor::Instructor;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/instructors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Instructor>>>> {
    let instructors = state.instructors.list_instructors().await?;
    Ok(Json(DataResponse { data: instructors }))
}
