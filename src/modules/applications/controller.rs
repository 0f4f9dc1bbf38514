use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::applications::model::{
    Application, CreateApplicationDto, UpdateApplicationStatusDto,
};
use crate::modules::applications::service::ApplicationService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationDto,
    responses(
        (status = 200, description = "Application submitted", body = Application),
        (status = 400, description = "Duplicate application or unknown references", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state, dto))]
pub async fn create_application(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateApplicationDto>,
) -> Result<Json<Application>, AppError> {
    let application = ApplicationService::create_application(&state.db, dto).await?;
    Ok(Json(application))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "All applications", body = [Application]),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state))]
pub async fn get_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = ApplicationService::get_applications(&state.db).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application details", body = Application),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state))]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Application>, AppError> {
    let application = ApplicationService::get_application(&state.db, id).await?;
    Ok(Json(application))
}

#[utoipa::path(
    get,
    path = "/api/applications/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Applications filed for the student", body = [Application])
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state))]
pub async fn get_applications_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications =
        ApplicationService::get_applications_for_student(&state.db, student_id).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = Application),
        (status = 400, description = "Application already decided", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state, dto))]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateApplicationStatusDto>,
) -> Result<Json<Application>, AppError> {
    let application = ApplicationService::update_status(&state.db, id, dto).await?;
    Ok(Json(application))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application deleted"),
        (status = 403, description = "Admin only", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Applications"
)]
#[instrument(skip(state))]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    ApplicationService::delete_application(&state.db, id).await?;
    Ok(Json(json!({"message": "Application deleted successfully"})))
}
