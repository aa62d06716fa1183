use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::imports::dtos::CreateImportDto;
use crate::features::imports::models::ImportRecord;
use crate::features::imports::services::ImportService;
use crate::shared::types::ApiResponse;

/// List all drug import records
#[utoipa::path(
    get,
    path = "/import",
    responses(
        (status = 200, description = "List of import records", body = ApiResponse<Vec<ImportRecord>>),
        (status = 500, description = "Error fetching imports")
    ),
    tag = "imports"
)]
pub async fn list_imports(
    State(service): State<Arc<ImportService>>,
) -> Result<Json<ApiResponse<Vec<ImportRecord>>>> {
    let records = service.list().await?;
    Ok(Json(ApiResponse::success(Some(records), None)))
}

/// Echo an import payload
///
/// The payload is validated and returned as created, but not persisted.
#[utoipa::path(
    post,
    path = "/new_import",
    request_body = CreateImportDto,
    responses(
        (status = 201, description = "Import accepted", body = ApiResponse<CreateImportDto>),
        (status = 400, description = "Invalid import payload")
    ),
    tag = "imports"
)]
pub async fn new_import(
    State(service): State<Arc<ImportService>>,
    AppJson(dto): AppJson<CreateImportDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreateImportDto>>)> {
    let dto = service.echo(dto)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(dto), None)),
    ))
}

/// Seed the demo import records
#[utoipa::path(
    get,
    path = "/seed1",
    responses(
        (status = 201, description = "Demo drug data seeded successfully", body = ApiResponse<Vec<ImportRecord>>),
        (status = 500, description = "Error seeding drug data")
    ),
    tag = "imports"
)]
pub async fn seed_imports(
    State(service): State<Arc<ImportService>>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ImportRecord>>>)> {
    let records = service.seed_demo().await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(records),
            Some("Demo drug data seeded successfully".to_string()),
        )),
    ))
}
