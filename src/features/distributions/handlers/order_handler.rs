use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::distributions::dtos::{
    CreateDistributionOrderDto, FileListDto, PlaceOrderResponseDto, PlaceOrderWithDocumentsDto,
};
use crate::features::distributions::models::DistributionOrder;
use crate::features::distributions::services::OrderService;
use crate::shared::multipart::UploadForm;
use crate::shared::types::ApiResponse;

const ORDER_FIELD: &str = "order";
const FILES_FIELD: &str = "files";

/// Get a distribution order by order number
#[utoipa::path(
    get,
    path = "/distribution/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order number")
    ),
    responses(
        (status = 200, description = "Distribution order", body = ApiResponse<DistributionOrder>),
        (status = 404, description = "Distribution order not found")
    ),
    tag = "distributions"
)]
pub async fn get_distribution(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<DistributionOrder>>> {
    let order = service.get_order(&order_id).await?;
    Ok(Json(ApiResponse::success(Some(order), None)))
}

/// List all distribution orders
#[utoipa::path(
    get,
    path = "/distribution",
    responses(
        (status = 200, description = "List of distribution orders", body = ApiResponse<Vec<DistributionOrder>>),
        (status = 500, description = "Error fetching distribution data")
    ),
    tag = "distributions"
)]
pub async fn list_distributions(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<ApiResponse<Vec<DistributionOrder>>>> {
    let orders = service.list_orders().await?;
    Ok(Json(ApiResponse::success(Some(orders), None)))
}

/// Place a distribution order
#[utoipa::path(
    post,
    path = "/distributionadd",
    request_body = CreateDistributionOrderDto,
    responses(
        (status = 200, description = "Order placed successfully", body = ApiResponse<PlaceOrderResponseDto>),
        (status = 400, description = "Invalid order payload"),
        (status = 409, description = "Order number already exists")
    ),
    tag = "distributions"
)]
pub async fn place_order(
    State(service): State<Arc<OrderService>>,
    AppJson(dto): AppJson<CreateDistributionOrderDto>,
) -> Result<Json<ApiResponse<PlaceOrderResponseDto>>> {
    let order = service.place_order(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(PlaceOrderResponseDto { order }),
        Some("Order placed successfully".to_string()),
    )))
}

/// Place a distribution order with attached documents
///
/// Accepts multipart/form-data with:
/// - `order`: the order as a JSON string (required)
/// - `files`: documents to attach, repeatable (optional)
#[utoipa::path(
    post,
    path = "/distributionadd1",
    request_body(
        content = PlaceOrderWithDocumentsDto,
        content_type = "multipart/form-data",
        description = "Order JSON plus the documents to attach",
    ),
    responses(
        (status = 200, description = "Order placed successfully", body = ApiResponse<PlaceOrderResponseDto>),
        (status = 400, description = "Invalid order payload or form"),
        (status = 409, description = "Order number already exists"),
        (status = 413, description = "Request body too large")
    ),
    tag = "distributions"
)]
pub async fn place_order_with_documents(
    State(service): State<Arc<OrderService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<PlaceOrderResponseDto>>> {
    let form = UploadForm::read(&mut multipart, FILES_FIELD).await?;

    let raw = form
        .field(ORDER_FIELD)
        .ok_or_else(|| AppError::BadRequest("Order data is required".to_string()))?;
    let dto: CreateDistributionOrderDto = serde_json::from_str(raw).map_err(|e| {
        debug!("Invalid order JSON: {}", e);
        AppError::Validation(format!("Invalid order data: {}", e))
    })?;

    let order = service.place_order_with_documents(dto, form.files).await?;
    Ok(Json(ApiResponse::success(
        Some(PlaceOrderResponseDto { order }),
        Some("Order placed successfully".to_string()),
    )))
}

/// List files stored for an order
#[utoipa::path(
    get,
    path = "/files/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order number or upload namespace")
    ),
    responses(
        (status = 200, description = "Stored file names", body = ApiResponse<FileListDto>),
        (status = 404, description = "No files found for this order")
    ),
    tag = "distributions"
)]
pub async fn list_order_files(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<FileListDto>>> {
    let files = service.list_order_files(&order_id).await?;
    Ok(Json(ApiResponse::success(Some(FileListDto { files }), None)))
}
