use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::scholarships::model::{
    CreateScholarshipDto, Scholarship, UpdateScholarshipDto,
};
use crate::modules::scholarships::service::ScholarshipService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/scholarships",
    request_body = CreateScholarshipDto,
    responses(
        (status = 200, description = "Scholarship created", body = Scholarship),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Scholarships"
)]
#[instrument(skip(state, dto))]
pub async fn create_scholarship(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateScholarshipDto>,
) -> Result<Json<Scholarship>, AppError> {
    let scholarship = ScholarshipService::create_scholarship(&state.db, dto).await?;
    Ok(Json(scholarship))
}

#[utoipa::path(
    get,
    path = "/api/scholarships",
    responses(
        (status = 200, description = "All scholarships", body = [Scholarship])
    ),
    security(("cookie_auth" = [])),
    tag = "Scholarships"
)]
#[instrument(skip(state))]
pub async fn get_scholarships(
    State(state): State<AppState>,
) -> Result<Json<Vec<Scholarship>>, AppError> {
    let scholarships = ScholarshipService::get_scholarships(&state.db).await?;
    Ok(Json(scholarships))
}

#[utoipa::path(
    get,
    path = "/api/scholarships/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Scholarship details", body = Scholarship),
        (status = 404, description = "Scholarship not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Scholarships"
)]
#[instrument(skip(state))]
pub async fn get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Scholarship>, AppError> {
    let scholarship = ScholarshipService::get_scholarship(&state.db, id).await?;
    Ok(Json(scholarship))
}

#[utoipa::path(
    put,
    path = "/api/scholarships/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    request_body = UpdateScholarshipDto,
    responses(
        (status = 200, description = "Scholarship updated", body = Scholarship),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Scholarship not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Scholarships"
)]
#[instrument(skip(state, dto))]
pub async fn update_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateScholarshipDto>,
) -> Result<Json<Scholarship>, AppError> {
    let scholarship = ScholarshipService::update_scholarship(&state.db, id, dto).await?;
    Ok(Json(scholarship))
}

#[utoipa::path(
    delete,
    path = "/api/scholarships/{id}",
    params(("id" = Uuid, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Scholarship deleted"),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Scholarship not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Scholarships"
)]
#[instrument(skip(state))]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    ScholarshipService::delete_scholarship(&state.db, id).await?;
    Ok(Json(json!({"message": "Scholarship deleted successfully"})))
}
