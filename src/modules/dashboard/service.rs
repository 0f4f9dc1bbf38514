use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::dashboard::model::{ApplicationStatusCount, DashboardSummary};
use crate::utils::errors::AppError;

pub struct DashboardService;

impl DashboardService {
    #[instrument(skip(db))]
    pub async fn get_summary(db: &PgPool) -> Result<DashboardSummary, AppError> {
        let row = sqlx::query_as::<_, (i64, i64, i64, i64, i64, i64, f64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM students),
                (SELECT COUNT(*) FROM scholarships),
                (SELECT COUNT(*) FROM scholarships WHERE is_active),
                (SELECT COUNT(*) FROM applications),
                (SELECT COUNT(*) FROM applications WHERE status IN ('PENDING', 'UNDER_REVIEW')),
                (SELECT COUNT(*) FROM applications WHERE status = 'APPROVED'),
                (SELECT COALESCE(SUM(s.amount), 0)
                   FROM applications a
                   JOIN scholarships s ON s.id = a.scholarship_id
                  WHERE a.status = 'APPROVED')
            "#,
        )
        .fetch_one(db)
        .await
        .context("Failed to aggregate dashboard summary")
        .map_err(AppError::database)?;

        Ok(DashboardSummary {
            total_students: row.0,
            total_scholarships: row.1,
            active_scholarships: row.2,
            total_applications: row.3,
            pending_applications: row.4,
            approved_applications: row.5,
            total_awarded_amount: row.6,
        })
    }

    #[instrument(skip(db))]
    pub async fn applications_by_status(
        db: &PgPool,
    ) -> Result<Vec<ApplicationStatusCount>, AppError> {
        let counts = sqlx::query_as::<_, ApplicationStatusCount>(
            r#"
            SELECT status, COUNT(*) AS count
            FROM applications
            GROUP BY status
            ORDER BY count DESC
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to aggregate applications by status")
        .map_err(AppError::database)?;

        Ok(counts)
    }
}
