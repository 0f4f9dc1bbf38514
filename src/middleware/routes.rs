//! Static route classification for the authorization gate.
//!
//! Every path classifies exactly once, before any credential is read: either
//! it matches the exact-path public allow-list, or the longest matching
//! portal prefix wins, or it falls back to protected-generic.

use crate::modules::users::model::UserRole;

/// Where an authenticated but under-privileged principal is sent.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No credential required; the gate forwards unchanged.
    Public,
    /// Admin portal: staff-side pages and their login flow.
    AdminPortal,
    /// Student portal (`/web`).
    StudentPortal,
    /// Protected but portal-agnostic; any authenticated principal passes.
    Generic,
}

impl RouteClass {
    /// Login page an unauthenticated request for this classification is
    /// redirected to.
    pub fn login_path(&self) -> &'static str {
        match self {
            RouteClass::AdminPortal => "/admin/login",
            RouteClass::StudentPortal => "/web/login",
            RouteClass::Public | RouteClass::Generic => "/login",
        }
    }

    /// Whether a principal with `role` may enter routes of this class.
    pub fn allows(&self, role: UserRole) -> bool {
        match self {
            RouteClass::Public => true,
            RouteClass::AdminPortal => matches!(role, UserRole::Admin | UserRole::Staff),
            RouteClass::StudentPortal => matches!(role, UserRole::Student),
            RouteClass::Generic => {
                matches!(
                    role,
                    UserRole::Admin | UserRole::Staff | UserRole::Student | UserRole::Viewer
                )
            }
        }
    }
}

/// Process-wide classification table. Built once at startup, carried in
/// `AppState`, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: Vec<&'static str>,
    prefixes: Vec<(&'static str, RouteClass)>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            public: vec![
                "/",
                "/login",
                "/admin/login",
                "/web/login",
                "/unauthorized",
                "/api/auth/login",
                // Public so a stale session can always be cleared; see DESIGN.md.
                "/api/auth/logout",
                "/health",
            ],
            prefixes: vec![
                ("/admin", RouteClass::AdminPortal),
                ("/web", RouteClass::StudentPortal),
                ("/api", RouteClass::Generic),
            ],
        }
    }

    /// Classify a normalized request path.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.contains(&path) {
            return RouteClass::Public;
        }

        self.prefixes
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, class)| *class)
            .unwrap_or(RouteClass::Generic)
    }
}

/// Prefix match on path-segment boundaries: `/admin` matches `/admin` and
/// `/admin/dashboard` but not `/administrator`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exact_paths() {
        let table = RouteTable::new();
        assert_eq!(table.classify("/"), RouteClass::Public);
        assert_eq!(table.classify("/admin/login"), RouteClass::Public);
        assert_eq!(table.classify("/web/login"), RouteClass::Public);
        assert_eq!(table.classify("/api/auth/login"), RouteClass::Public);
        assert_eq!(table.classify("/api/auth/logout"), RouteClass::Public);
        assert_eq!(table.classify("/unauthorized"), RouteClass::Public);
        assert_eq!(table.classify("/health"), RouteClass::Public);
    }

    #[test]
    fn test_portal_prefixes() {
        let table = RouteTable::new();
        assert_eq!(table.classify("/admin/dashboard"), RouteClass::AdminPortal);
        assert_eq!(table.classify("/admin"), RouteClass::AdminPortal);
        assert_eq!(table.classify("/web/profile"), RouteClass::StudentPortal);
        assert_eq!(table.classify("/api/users"), RouteClass::Generic);
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let table = RouteTable::new();
        // Not under the admin portal, so it falls back to protected-generic.
        assert_eq!(table.classify("/administrator"), RouteClass::Generic);
        assert_eq!(table.classify("/webinar"), RouteClass::Generic);
    }

    #[test]
    fn test_unmatched_defaults_to_generic() {
        let table = RouteTable::new();
        assert_eq!(table.classify("/reports/export"), RouteClass::Generic);
        assert_eq!(table.classify("/swagger-ui"), RouteClass::Generic);
    }

    #[test]
    fn test_exact_public_wins_over_prefix() {
        let table = RouteTable::new();
        // `/admin/login` sits under the `/admin` prefix but is allow-listed.
        assert_eq!(table.classify("/admin/login"), RouteClass::Public);
        // Sibling paths are still protected.
        assert_eq!(table.classify("/admin/login/audit"), RouteClass::AdminPortal);
    }

    #[test]
    fn test_login_paths_per_portal() {
        assert_eq!(RouteClass::AdminPortal.login_path(), "/admin/login");
        assert_eq!(RouteClass::StudentPortal.login_path(), "/web/login");
        assert_eq!(RouteClass::Generic.login_path(), "/login");
    }

    #[test]
    fn test_permitted_roles() {
        assert!(RouteClass::AdminPortal.allows(UserRole::Admin));
        assert!(RouteClass::AdminPortal.allows(UserRole::Staff));
        assert!(!RouteClass::AdminPortal.allows(UserRole::Student));
        assert!(!RouteClass::AdminPortal.allows(UserRole::Viewer));

        assert!(RouteClass::StudentPortal.allows(UserRole::Student));
        assert!(!RouteClass::StudentPortal.allows(UserRole::Admin));

        for role in [
            UserRole::Admin,
            UserRole::Staff,
            UserRole::Student,
            UserRole::Viewer,
        ] {
            assert!(RouteClass::Generic.allows(role));
        }
    }
}
