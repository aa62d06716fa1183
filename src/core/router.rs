use axum::{http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::auth::{routes as auth_routes, AuthService};
use crate::features::distributions::{routes as distributions_routes, OrderService};
use crate::features::imports::{routes as imports_routes, ImportService};
use crate::features::uploads::{routes as uploads_routes, UploadService};
use crate::shared::types::ApiResponse;

/// Every service the HTTP layer needs, constructed once at startup
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub imports: Arc<ImportService>,
    pub orders: Arc<OrderService>,
    pub uploads: Arc<UploadService>,
}

async fn welcome() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success(
        None,
        Some("Welcome to the pharma logistics API".to_string()),
    ))
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All feature routes plus `/` and `/health`, without HTTP layers
pub fn api_routes(services: AppServices, config: &AppConfig) -> Router {
    Router::new()
        .route("/", get(welcome).post(welcome))
        .route("/health", get(health_check))
        .merge(auth_routes::routes(services.auth))
        .merge(imports_routes::routes(services.imports))
        .merge(distributions_routes::routes(
            services.orders,
            config.max_request_body_size,
        ))
        .merge(uploads_routes::routes(
            services.uploads,
            config.max_request_body_size,
        ))
}

/// Wrap `router` with CORS, request-id and tracing layers
pub fn with_http_layers(router: Router, config: &AppConfig) -> Router {
    router
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
