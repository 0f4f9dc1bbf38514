use axum::{Json, extract::State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::dashboard::model::{ApplicationStatusCount, DashboardSummary};
use crate::modules::dashboard::service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Headline counts and totals", body = DashboardSummary),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let summary = DashboardService::get_summary(&state.db).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/applications/by-status",
    responses(
        (status = 200, description = "Application counts grouped by status", body = [ApplicationStatusCount]),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_applications_by_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationStatusCount>>, AppError> {
    let counts = DashboardService::applications_by_status(&state.db).await?;
    Ok(Json(counts))
}
