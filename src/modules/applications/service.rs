use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::applications::model::{
    Application, CreateApplicationDto, UpdateApplicationStatusDto,
};
use crate::utils::errors::AppError;

const APPLICATION_COLUMNS: &str = "id, student_id, scholarship_id, status, notes, submitted_at, \
                                   decided_at, created_at, updated_at";

pub struct ApplicationService;

impl ApplicationService {
    #[instrument(skip(db, dto))]
    pub async fn create_application(
        db: &PgPool,
        dto: CreateApplicationDto,
    ) -> Result<Application, AppError> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (student_id, scholarship_id, status, notes, submitted_at)
            VALUES ($1, $2, 'PENDING', $3, NOW())
            RETURNING id, student_id, scholarship_id, status, notes, submitted_at,
                      decided_at, created_at, updated_at
            "#,
        )
        .bind(dto.student_id)
        .bind(dto.scholarship_id)
        .bind(&dto.notes)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "This student has already applied to that scholarship"
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Unknown student or scholarship"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        Ok(application)
    }

    #[instrument(skip(db))]
    pub async fn get_applications(db: &PgPool) -> Result<Vec<Application>, AppError> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications ORDER BY submitted_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch applications")
        .map_err(AppError::database)?;

        Ok(applications)
    }

    #[instrument(skip(db))]
    pub async fn get_application(db: &PgPool, id: Uuid) -> Result<Application, AppError> {
        sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch application")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Application not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_applications_for_student(
        db: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<Application>, AppError> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications \
             WHERE student_id = $1 ORDER BY submitted_at DESC"
        ))
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch applications for student")
        .map_err(AppError::database)?;

        Ok(applications)
    }

    /// Move an application through its lifecycle. Decided applications stay
    /// decided; `decided_at` is stamped when a terminal status is reached.
    #[instrument(skip(db, dto))]
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        dto: UpdateApplicationStatusDto,
    ) -> Result<Application, AppError> {
        let existing = Self::get_application(db, id).await?;

        if existing.status.is_terminal() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Application has already been decided"
            )));
        }

        let decided = dto.status.is_terminal();
        let notes = dto.notes.or(existing.notes);

        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = $1,
                notes = $2,
                decided_at = CASE WHEN $3 THEN NOW() ELSE decided_at END,
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, student_id, scholarship_id, status, notes, submitted_at,
                      decided_at, created_at, updated_at
            "#,
        )
        .bind(dto.status)
        .bind(&notes)
        .bind(decided)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update application status")
        .map_err(AppError::database)?;

        Ok(application)
    }

    #[instrument(skip(db))]
    pub async fn delete_application(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete application")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Application not found"
            )));
        }

        Ok(())
    }
}
