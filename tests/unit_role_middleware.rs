use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Router, middleware};
use scholartrack::middleware::auth::AuthUser;
use scholartrack::middleware::gate::{USER_ID_HEADER, USER_NAME_HEADER, USER_ROLE_HEADER};
use scholartrack::middleware::role::{check_any_role, require_admin, require_staff, role_rank};
use scholartrack::modules::users::model::UserRole;
use tower::ServiceExt;
use uuid::Uuid;

fn create_test_auth_user(role: UserRole) -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        username: "jdoe".to_string(),
        role,
    }
}

/// A router guarded the way protected API subtrees are guarded, with a
/// handler that only runs if the layer lets the request through.
fn admin_only_app() -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(require_admin))
}

fn staff_app() -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(require_staff))
}

fn request_as(role: UserRole) -> Request<Body> {
    Request::builder()
        .uri("/")
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .header(USER_ROLE_HEADER, role.as_str())
        .header(USER_NAME_HEADER, "jdoe")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_require_admin_allows_admin() {
    let response = admin_only_app()
        .oneshot(request_as(UserRole::Admin))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_require_admin_rejects_staff() {
    let response = admin_only_app()
        .oneshot(request_as(UserRole::Staff))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_require_admin_rejects_missing_principal() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = admin_only_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_require_staff_allows_admin_and_staff() {
    for role in [UserRole::Admin, UserRole::Staff] {
        let response = staff_app().oneshot(request_as(role)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_require_staff_rejects_student_and_viewer() {
    for role in [UserRole::Student, UserRole::Viewer] {
        let response = staff_app().oneshot(request_as(role)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_rejects_garbage_role_header() {
    let request = Request::builder()
        .uri("/")
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .header(USER_ROLE_HEADER, "SUPERUSER")
        .header(USER_NAME_HEADER, "jdoe")
        .body(Body::empty())
        .unwrap();

    let response = staff_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_check_any_role_match() {
    let auth_user = create_test_auth_user(UserRole::Staff);
    assert!(check_any_role(&auth_user, &[UserRole::Admin, UserRole::Staff]).is_ok());
}

#[test]
fn test_check_any_role_no_match() {
    let auth_user = create_test_auth_user(UserRole::Viewer);
    assert!(check_any_role(&auth_user, &[UserRole::Admin, UserRole::Staff]).is_err());
}

#[test]
fn test_check_any_role_empty_list() {
    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_any_role(&auth_user, &[]).is_err());
}

#[test]
fn test_role_rank_ordering() {
    assert!(role_rank(UserRole::Admin) > role_rank(UserRole::Staff));
    assert!(role_rank(UserRole::Staff) > role_rank(UserRole::Student));
    assert!(role_rank(UserRole::Student) > role_rank(UserRole::Viewer));
}
