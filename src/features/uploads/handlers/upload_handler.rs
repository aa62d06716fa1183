use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::uploads::dtos::{UploadFilesDto, UploadResponseDto};
use crate::features::uploads::services::{UploadService, DEFAULT_NAMESPACE};
use crate::shared::multipart::UploadForm;
use crate::shared::types::ApiResponse;

/// Upload documents for an order
///
/// Accepts multipart/form-data with:
/// - `orderId`: namespace for the files (optional, defaults to `default`)
/// - `trackingId`: echoed back (optional)
/// - `files`: the files, repeatable (at least one required)
#[utoipa::path(
    post,
    path = "/upload",
    request_body(
        content = UploadFilesDto,
        content_type = "multipart/form-data",
        description = "Files plus the order and tracking identifiers",
    ),
    responses(
        (status = 200, description = "Files uploaded successfully", body = ApiResponse<UploadResponseDto>),
        (status = 400, description = "No files uploaded or invalid order identifier"),
        (status = 413, description = "Request body too large")
    ),
    tag = "uploads"
)]
pub async fn upload_files(
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponseDto>>> {
    let form = UploadForm::read(&mut multipart, "files").await?;
    let order_id = form.field("orderId");
    let tracking_id = form.field("trackingId");

    let files = service.store_uploads(order_id, &form.files).await?;

    let order_id = order_id.unwrap_or(DEFAULT_NAMESPACE).to_string();
    let message = format!(
        "Files uploaded successfully for Order ID: {} & Tracking ID: {}",
        order_id,
        tracking_id.unwrap_or("N/A")
    );

    Ok(Json(ApiResponse::success(
        Some(UploadResponseDto {
            order_id,
            tracking_id: tracking_id.map(str::to_string),
            files,
        }),
        Some(message),
    )))
}

/// Upload page for an order, the target of the shipment QR code
#[utoipa::path(
    get,
    path = "/upload/{order_id}/{tracking_id}",
    params(
        ("order_id" = String, Path, description = "Order number"),
        ("tracking_id" = String, Path, description = "Tracking number")
    ),
    responses(
        (status = 200, description = "HTML upload form", content_type = "text/html", body = String)
    ),
    tag = "uploads"
)]
pub async fn upload_form(
    State(service): State<Arc<UploadService>>,
    Path((order_id, tracking_id)): Path<(String, String)>,
) -> Result<Html<String>> {
    let html = service.render_upload_form(&order_id, &tracking_id)?;
    Ok(Html(html))
}
