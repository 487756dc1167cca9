//! Handlers for the `/departments` JSON resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::department::{Department, DepartmentSummary};
use campus_core::error::CoreError;
use campus_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::forms::{validate_bound, DepartmentPayload};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: DbId,
}

/// POST /api/v1/departments
///
/// Binds and validates the payload, then dispatches it to the registered
/// handler. Unparseable or invalid fields return 400 with every violation;
/// a body that is not a JSON object returns 400 `BAD_REQUEST`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Created>>)> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (command, binding) = payload.bind();
    let command = validate_bound(command, binding).map_err(CoreError::Validation)?;
    let id = state
        .create_department
        .handle(command, state.shutdown.child_token())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Created { id },
        }),
    ))
}

/// GET /api/v1/departments
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DepartmentSummary>>>> {
    let departments = state.departments.list_summaries().await?;
    Ok(Json(DataResponse { data: departments }))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Department>>> {
    let department = state
        .departments
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    Ok(Json(DataResponse { data: department }))
}
