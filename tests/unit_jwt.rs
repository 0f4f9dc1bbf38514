use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use scholartrack::config::jwt::JwtConfig;
use scholartrack::modules::auth::model::Claims;
use scholartrack::modules::users::model::UserRole;
use scholartrack::utils::jwt::{VerifyError, create_access_token, verify_token};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

fn encode_claims(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, "jdoe", UserRole::Student, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_create_access_token_all_roles() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    for role in [
        UserRole::Admin,
        UserRole::Staff,
        UserRole::Student,
        UserRole::Viewer,
    ] {
        let result = create_access_token(user_id, "jdoe", role, &jwt_config);
        assert!(result.is_ok());
    }
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "jdoe", UserRole::Staff, &jwt_config).unwrap();
    let principal = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(principal.id, user_id);
    assert_eq!(principal.username, "jdoe");
    assert_eq!(principal.role, UserRole::Staff);
}

#[test]
fn test_verify_token_wrong_secret_is_bad_signature() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "jdoe", UserRole::Student, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert_eq!(result.unwrap_err(), VerifyError::BadSignature);
}

#[test]
fn test_verify_token_expired() {
    let jwt_config = get_test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    // Well past the default 60 second leeway.
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "jdoe".to_string(),
        role: "STUDENT".to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    let token = encode_claims(&claims, &jwt_config.secret);

    let result = verify_token(&token, &jwt_config);

    assert_eq!(result.unwrap_err(), VerifyError::Expired);
}

#[test]
fn test_verify_token_malformed_inputs() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "",
        "not-a-jwt",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert_eq!(result.unwrap_err(), VerifyError::Malformed, "{:?}", token);
    }
}

#[test]
fn test_verify_token_rejects_non_uuid_subject() {
    let jwt_config = get_test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: "not-a-uuid".to_string(),
        username: "jdoe".to_string(),
        role: "STUDENT".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode_claims(&claims, &jwt_config.secret);

    let result = verify_token(&token, &jwt_config);

    assert_eq!(result.unwrap_err(), VerifyError::Malformed);
}

#[test]
fn test_verify_token_rejects_unknown_role() {
    let jwt_config = get_test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "jdoe".to_string(),
        role: "SUPERUSER".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode_claims(&claims, &jwt_config.secret);

    let result = verify_token(&token, &jwt_config);

    assert_eq!(result.unwrap_err(), VerifyError::Malformed);
}

#[test]
fn test_verify_token_rejects_lowercase_role() {
    let jwt_config = get_test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    // Roles are stored in SCREAMING_SNAKE_CASE; anything else fails closed.
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        username: "jdoe".to_string(),
        role: "student".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode_claims(&claims, &jwt_config.secret);

    let result = verify_token(&token, &jwt_config);

    assert_eq!(result.unwrap_err(), VerifyError::Malformed);
}

#[test]
fn test_token_roles_round_trip_screaming_snake_case() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    for (role, expected) in [
        (UserRole::Admin, "ADMIN"),
        (UserRole::Staff, "STAFF"),
        (UserRole::Student, "STUDENT"),
        (UserRole::Viewer, "VIEWER"),
    ] {
        let token = create_access_token(user_id, "jdoe", role, &jwt_config).unwrap();
        let principal = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(principal.role, role);
        assert_eq!(principal.role.as_str(), expected);
    }
}

#[test]
fn test_create_token_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_access_token(user_id1, "alice", UserRole::Student, &jwt_config).unwrap();
    let token2 = create_access_token(user_id2, "bob", UserRole::Student, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let principal1 = verify_token(&token1, &jwt_config).unwrap();
    let principal2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(principal1.id, user_id1);
    assert_eq!(principal2.id, user_id2);
    assert_eq!(principal1.username, "alice");
    assert_eq!(principal2.username, "bob");
}
