use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student record tracked by the scholarship office. May be linked to a
/// portal account (`user_id`) once the student registers for the web portal.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_no: String,
    pub program: String,
    pub enrollment_year: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "student_no is required"))]
    pub student_no: String,
    #[validate(length(min = 1, message = "program is required"))]
    pub program: String,
    pub enrollment_year: Option<i32>,
    pub user_id: Option<Uuid>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "program must not be empty"))]
    pub program: Option<String>,
    pub enrollment_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_student_dto_validation() {
        let dto = CreateStudentDto {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@example.com".to_string(),
            student_no: "ST-2026-0042".to_string(),
            program: "Computer Science".to_string(),
            enrollment_year: Some(2026),
            user_id: None,
        };
        assert!(dto.validate().is_ok());

        let missing_name = CreateStudentDto {
            first_name: "".to_string(),
            ..dto
        };
        assert!(missing_name.validate().is_err());
    }

    #[test]
    fn test_update_student_dto_partial() {
        let dto = UpdateStudentDto {
            first_name: None,
            last_name: None,
            email: Some("new@example.com".to_string()),
            program: None,
            enrollment_year: None,
        };
        assert!(dto.validate().is_ok());

        let bad = UpdateStudentDto {
            email: Some("nope".to_string()),
            ..dto
        };
        assert!(bad.validate().is_err());
    }
}
