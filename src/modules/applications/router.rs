use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::middleware::role::{require_admin, require_staff};
use crate::modules::applications::controller::{
    create_application, delete_application, get_application, get_applications,
    get_applications_for_student, update_application_status,
};
use crate::state::AppState;

/// Submissions and per-student listings are open to any authenticated
/// principal (the student portal uses them); review and decisions are
/// staff-only, deletion admin-only.
pub fn init_applications_router() -> Router<AppState> {
    let open = Router::new()
        .route("/", post(create_application))
        .route("/student/{student_id}", get(get_applications_for_student));

    let staff = Router::new()
        .route("/", get(get_applications))
        .route("/{id}", get(get_application))
        .route("/{id}/status", patch(update_application_status))
        .route_layer(middleware::from_fn(require_staff));

    let admin = Router::new()
        .route("/{id}", delete(delete_application))
        .route_layer(middleware::from_fn(require_admin));

    open.merge(staff).merge(admin)
}
