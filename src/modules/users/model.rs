//! User data models and DTOs.
//!
//! A user is a portal account: the credentials someone logs in with plus the
//! role that drives portal access. Student *records* (the people applications
//! are filed for) live in the students module and may or may not be linked to
//! a portal account.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The closed set of portal roles.
///
/// Stored and serialized in SCREAMING_SNAKE_CASE (`ADMIN`, `STAFF`, ...),
/// which is also the form carried in token claims and the `x-user-role`
/// context header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Staff,
    Student,
    Viewer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Staff => "STAFF",
            UserRole::Student => "STUDENT",
            UserRole::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ();

    /// Strict parse: anything outside the closed set is an error, never a
    /// default role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "STAFF" => Ok(UserRole::Staff),
            "STUDENT" => Ok(UserRole::Student),
            "VIEWER" => Ok(UserRole::Viewer),
            _ => Err(()),
        }
    }
}

/// A portal account as returned by the API. The password hash never leaves
/// the service layer.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Internal row used only during login to check credentials.
#[derive(FromRow, Debug, Clone)]
pub struct UserWithPassword {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserWithPassword {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Admin,
            UserRole::Staff,
            UserRole::Student,
            UserRole::Viewer,
        ] {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("MANAGER".parse::<UserRole>().is_err());
        assert!("admin".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serde_form() {
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"STUDENT\""
        );
        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_create_user_dto_validation() {
        let dto = CreateUserDto {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "password123".to_string(),
            role: UserRole::Staff,
        };
        assert!(dto.validate().is_ok());

        let short = CreateUserDto {
            password: "short".to_string(),
            ..dto.clone()
        };
        assert!(short.validate().is_err());

        let bad_email = CreateUserDto {
            email: "not-an-email".to_string(),
            ..dto
        };
        assert!(bad_email.validate().is_err());
    }
}
