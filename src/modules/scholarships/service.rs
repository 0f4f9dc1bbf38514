use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::scholarships::model::{
    CreateScholarshipDto, Scholarship, UpdateScholarshipDto,
};
use crate::utils::errors::AppError;

const SCHOLARSHIP_COLUMNS: &str = "id, name, description, sponsor, amount, deadline, is_active, \
                                   created_at, updated_at";

pub struct ScholarshipService;

impl ScholarshipService {
    #[instrument(skip(db, dto))]
    pub async fn create_scholarship(
        db: &PgPool,
        dto: CreateScholarshipDto,
    ) -> Result<Scholarship, AppError> {
        let scholarship = sqlx::query_as::<_, Scholarship>(
            r#"
            INSERT INTO scholarships (name, description, sponsor, amount, deadline, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, sponsor, amount, deadline, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.sponsor)
        .bind(dto.amount)
        .bind(dto.deadline)
        .bind(dto.is_active)
        .fetch_one(db)
        .await
        .context("Failed to create scholarship")
        .map_err(AppError::database)?;

        Ok(scholarship)
    }

    #[instrument(skip(db))]
    pub async fn get_scholarships(db: &PgPool) -> Result<Vec<Scholarship>, AppError> {
        let scholarships = sqlx::query_as::<_, Scholarship>(&format!(
            "SELECT {SCHOLARSHIP_COLUMNS} FROM scholarships ORDER BY deadline"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch scholarships")
        .map_err(AppError::database)?;

        Ok(scholarships)
    }

    #[instrument(skip(db))]
    pub async fn get_scholarship(db: &PgPool, id: Uuid) -> Result<Scholarship, AppError> {
        sqlx::query_as::<_, Scholarship>(&format!(
            "SELECT {SCHOLARSHIP_COLUMNS} FROM scholarships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch scholarship")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Scholarship not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_scholarship(
        db: &PgPool,
        id: Uuid,
        dto: UpdateScholarshipDto,
    ) -> Result<Scholarship, AppError> {
        let existing = Self::get_scholarship(db, id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let description = dto.description.or(existing.description);
        let sponsor = dto.sponsor.or(existing.sponsor);
        let amount = dto.amount.unwrap_or(existing.amount);
        let deadline = dto.deadline.unwrap_or(existing.deadline);
        let is_active = dto.is_active.unwrap_or(existing.is_active);

        let scholarship = sqlx::query_as::<_, Scholarship>(
            r#"
            UPDATE scholarships
            SET name = $1, description = $2, sponsor = $3, amount = $4, deadline = $5,
                is_active = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING id, name, description, sponsor, amount, deadline, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(&name)
        .bind(&description)
        .bind(&sponsor)
        .bind(amount)
        .bind(deadline)
        .bind(is_active)
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update scholarship")
        .map_err(AppError::database)?;

        Ok(scholarship)
    }

    #[instrument(skip(db))]
    pub async fn delete_scholarship(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM scholarships WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete scholarship")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Scholarship not found"
            )));
        }

        Ok(())
    }
}
