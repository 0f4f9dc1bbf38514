use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::applications::model::ApplicationStatus;

/// Headline numbers for the staff dashboard.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DashboardSummary {
    pub total_students: i64,
    pub total_scholarships: i64,
    pub active_scholarships: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
    pub approved_applications: i64,
    pub total_awarded_amount: f64,
}

/// One slice of the applications-by-status breakdown.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct ApplicationStatusCount {
    pub status: ApplicationStatus,
    pub count: i64,
}
