//! Role enforcement for API routes.
//!
//! The authorization gate guarantees an authenticated principal on every
//! protected request; these layers add finer role requirements per router
//! subtree, answering with 403 JSON rather than the portal redirect (API
//! callers are XHR clients, not browsers navigating pages).

use axum::{
    extract::{FromRequestParts, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

async fn require_roles(
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &()).await?;

    if !allowed_roles.contains(&auth_user.role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.role
        )));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Route layer allowing admins only.
pub async fn require_admin(req: Request, next: Next) -> Response {
    match require_roles(req, next, &[UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Route layer allowing admins and staff.
pub async fn require_staff(req: Request, next: Next) -> Response {
    match require_roles(req, next, &[UserRole::Admin, UserRole::Staff]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// In-handler check for when a route layer is too coarse.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {:?}, but user has role: {}",
            allowed_roles,
            auth_user.role
        )));
    }

    Ok(())
}

/// Privilege ordering, higher means more access.
pub fn role_rank(role: UserRole) -> u8 {
    match role {
        UserRole::Admin => 3,
        UserRole::Staff => 2,
        UserRole::Student => 1,
        UserRole::Viewer => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn auth_user(role: UserRole) -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            username: "test".to_string(),
            role,
        }
    }

    #[test]
    fn test_check_any_role_match() {
        let user = auth_user(UserRole::Staff);
        assert!(check_any_role(&user, &[UserRole::Admin, UserRole::Staff]).is_ok());
    }

    #[test]
    fn test_check_any_role_no_match() {
        let user = auth_user(UserRole::Student);
        assert!(check_any_role(&user, &[UserRole::Admin, UserRole::Staff]).is_err());
    }

    #[test]
    fn test_check_any_role_empty_list() {
        let user = auth_user(UserRole::Admin);
        assert!(check_any_role(&user, &[]).is_err());
    }

    #[test]
    fn test_role_rank_ordering() {
        assert!(role_rank(UserRole::Admin) > role_rank(UserRole::Staff));
        assert!(role_rank(UserRole::Staff) > role_rank(UserRole::Student));
        assert!(role_rank(UserRole::Student) > role_rank(UserRole::Viewer));
    }
}
