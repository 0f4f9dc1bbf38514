use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle of a scholarship application.
///
/// `APPROVED` and `REJECTED` are terminal; a decided application cannot be
/// re-decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Approved | ApplicationStatus::Rejected)
    }
}

/// A student's application to a scholarship.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Application {
    pub id: Uuid,
    pub student_id: Uuid,
    pub scholarship_id: Uuid,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateApplicationDto {
    pub student_id: Uuid,
    pub scholarship_id: Uuid,
    #[validate(length(max = 4000, message = "notes must be at most 4000 characters"))]
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: ApplicationStatus,
    #[validate(length(max = 4000, message = "notes must be at most 4000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(ApplicationStatus::Approved.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Pending.is_terminal());
        assert!(!ApplicationStatus::UnderReview.is_terminal());
    }

    #[test]
    fn test_status_serde_form() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(),
            "\"UNDER_REVIEW\""
        );
        let status: ApplicationStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(status, ApplicationStatus::Pending);
    }
}
