use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::uploads::handlers;
use crate::features::uploads::services::UploadService;

pub fn routes(service: Arc<UploadService>, body_limit: usize) -> Router {
    Router::new()
        .route(
            "/upload",
            post(handlers::upload_files).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/upload/{order_id}/{tracking_id}",
            get(handlers::upload_form),
        )
        .with_state(service)
}
