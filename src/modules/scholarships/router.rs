use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_staff;
use crate::modules::scholarships::controller::{
    create_scholarship, delete_scholarship, get_scholarship, get_scholarships, update_scholarship,
};
use crate::state::AppState;

/// Reads are open to any authenticated principal (students browse the
/// catalog when applying); mutations are staff-only.
pub fn init_scholarships_router() -> Router<AppState> {
    let read = Router::new()
        .route("/", get(get_scholarships))
        .route("/{id}", get(get_scholarship));

    let write = Router::new()
        .route("/", post(create_scholarship))
        .route("/{id}", put(update_scholarship).delete(delete_scholarship))
        .route_layer(middleware::from_fn(require_staff));

    read.merge(write)
}
