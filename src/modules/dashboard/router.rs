use axum::{Router, routing::get};

use crate::modules::dashboard::controller::{get_applications_by_status, get_summary};
use crate::state::AppState;

pub fn init_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/applications/by-status", get(get_applications_by_status))
}
