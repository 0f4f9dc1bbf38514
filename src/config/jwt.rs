use std::env;

/// Development-only fallback secret. Used when `JWT_SECRET` is unset so the
/// server can still boot locally; `from_env` warns loudly when it applies.
const INSECURE_DEV_SECRET: &str = "scholartrack-dev-secret-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET is not set; falling back to the built-in development secret. \
                 Do not run production with this configuration."
            );
            INSECURE_DEV_SECRET.to_string()
        });

        Self {
            secret,
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
