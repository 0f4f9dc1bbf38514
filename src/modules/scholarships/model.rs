use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A scholarship offering students can apply for.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Scholarship {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sponsor: Option<String>,
    pub amount: f64,
    pub deadline: chrono::NaiveDate,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateScholarshipDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub sponsor: Option<String>,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    pub deadline: chrono::NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateScholarshipDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub sponsor: Option<String>,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: Option<f64>,
    pub deadline: Option<chrono::NaiveDate>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_scholarship_dto_defaults_active() {
        let json = r#"{"name":"STEM Grant","amount":5000.0,"deadline":"2026-12-01"}"#;
        let dto: CreateScholarshipDto = serde_json::from_str(json).unwrap();
        assert!(dto.is_active);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let dto = CreateScholarshipDto {
            name: "Grant".to_string(),
            description: None,
            sponsor: None,
            amount: -1.0,
            deadline: chrono::NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            is_active: true,
        };
        assert!(dto.validate().is_err());
    }
}
