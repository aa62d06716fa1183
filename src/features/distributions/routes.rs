use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::distributions::handlers;
use crate::features::distributions::services::OrderService;

/// Create routes for the distributions feature.
///
/// `body_limit` caps the multipart upload route.
pub fn routes(service: Arc<OrderService>, body_limit: usize) -> Router {
    Router::new()
        .route("/distribution", get(handlers::list_distributions))
        .route("/distribution/{order_id}", get(handlers::get_distribution))
        .route("/distributionadd", post(handlers::place_order))
        .route(
            "/distributionadd1",
            post(handlers::place_order_with_documents).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/files/{order_id}", get(handlers::list_order_files))
        .with_state(service)
}
