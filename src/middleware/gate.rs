//! The request-authorization gate.
//!
//! Applied once over the whole router; every request passes through before
//! any handler runs. Public paths are forwarded untouched. Protected paths
//! resolve a principal from the `auth_token` cookie and end in exactly one
//! of four terminal outcomes:
//!
//! - no credential: redirect to the portal login page,
//! - invalid credential (malformed, bad signature, expired): redirect to the
//!   portal login page and delete the stale cookie,
//! - valid credential, role not permitted for the portal: redirect to
//!   `/unauthorized`, credential untouched,
//! - authorized: forward with `x-user-id` / `x-user-role` / `x-user-name`
//!   injected for downstream handlers to consume without re-verifying.
//!
//! Every outcome is a well-formed response; nothing here propagates a fault
//! to the transport layer.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{debug, warn};

use crate::middleware::routes::{RouteClass, UNAUTHORIZED_PATH};
use crate::state::AppState;
use crate::utils::jwt::{Principal, verify_token};

/// Canonical session cookie name, used by the gate, login, and logout alike.
pub const AUTH_COOKIE: &str = "auth_token";

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const USER_NAME_HEADER: &str = "x-user-name";

pub async fn authorize_request(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let class = state.route_table.classify(req.uri().path());

    // Public paths never touch the cookie jar.
    if class == RouteClass::Public {
        return next.run(req).await;
    }

    // Principal headers are derived state owned by this gate. Whatever the
    // client sent under those names is untrusted and removed up front.
    strip_principal_headers(&mut req);

    let jar = CookieJar::from_headers(req.headers());

    let Some(token) = jar.get(AUTH_COOKIE).map(|c| c.value().to_string()) else {
        // Nothing to clear; there is no cookie.
        return Redirect::temporary(class.login_path()).into_response();
    };

    let principal = match verify_token(&token, &state.jwt_config) {
        Ok(principal) => principal,
        Err(reason) => {
            // The reason stays in the logs; the client sees one uniform
            // "back to login" behavior regardless of why.
            debug!(path = %req.uri().path(), %reason, "rejected session credential");
            return reject_credential(jar, class);
        }
    };

    if !class.allows(principal.role) {
        warn!(
            path = %req.uri().path(),
            role = %principal.role,
            "authenticated principal lacks portal access"
        );
        // Valid credential, insufficient privilege: do not clear the cookie.
        return Redirect::temporary(UNAUTHORIZED_PATH).into_response();
    }

    let Some(headers) = principal_headers(&principal) else {
        // A username that cannot be represented as a header value means the
        // token payload is unusable; fail closed like any invalid credential.
        debug!(path = %req.uri().path(), "principal not representable in context headers");
        return reject_credential(jar, class);
    };

    for (name, value) in headers {
        req.headers_mut().insert(name, value);
    }

    next.run(req).await
}

/// Redirect to the portal login and delete the stale credential.
fn reject_credential(jar: CookieJar, class: RouteClass) -> Response {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    (jar, Redirect::temporary(class.login_path())).into_response()
}

fn strip_principal_headers(req: &mut Request) {
    for name in [USER_ID_HEADER, USER_ROLE_HEADER, USER_NAME_HEADER] {
        req.headers_mut().remove(name);
    }
}

fn principal_headers(principal: &Principal) -> Option<[(HeaderName, HeaderValue); 3]> {
    let id = HeaderValue::from_str(&principal.id.to_string()).ok()?;
    let role = HeaderValue::from_static(principal.role.as_str());
    let name = HeaderValue::from_str(&principal.username).ok()?;

    Some([
        (HeaderName::from_static(USER_ID_HEADER), id),
        (HeaderName::from_static(USER_ROLE_HEADER), role),
        (HeaderName::from_static(USER_NAME_HEADER), name),
    ])
}
