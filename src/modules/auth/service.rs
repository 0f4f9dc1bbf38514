use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::LoginRequest;
use crate::modules::users::model::{User, UserWithPassword};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

pub struct AuthService;

impl AuthService {
    /// Check credentials and mint a session token. Bad username and bad
    /// password produce the same error so the response does not reveal which
    /// accounts exist.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, User), AppError> {
        let user = sqlx::query_as::<_, UserWithPassword>(
            r#"
            SELECT id, username, email, role, password, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .context("Failed to look up user for login")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid username or password")))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid username or password"
            )));
        }

        let token = create_access_token(user.id, &user.username, user.role, jwt_config)?;

        Ok((token, user.into_user()))
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }
}
