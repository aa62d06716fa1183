use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;
use crate::shared::validation::format_validation_errors;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

/// Login with username and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful"),
        (status = 400, description = "Invalid username or password"),
        (status = 500, description = "Server error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

    service.authenticate(&dto.username, &dto.password).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Login successful".to_string()),
    )))
}

/// Seed the demo user
#[utoipa::path(
    get,
    path = "/seed",
    responses(
        (status = 201, description = "User seeded successfully"),
        (status = 409, description = "Demo user already exists"),
        (status = 500, description = "Error seeding user")
    ),
    tag = "auth"
)]
pub async fn seed_user(
    State(service): State<Arc<AuthService>>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    service.seed_demo_credential().await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            None,
            Some("User seeded successfully".to_string()),
        )),
    ))
}
