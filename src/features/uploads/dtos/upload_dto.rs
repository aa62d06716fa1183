use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upload form for OpenAPI documentation only.
/// The handler reads the form with axum's Multipart extractor.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadFilesDto {
    /// Namespace for the files; `default` when omitted
    #[schema(example = "ORD-2025-001")]
    pub order_id: Option<String>,
    #[schema(example = "TRK-778899")]
    pub tracking_id: Option<String>,
    /// Files to store; repeat the field for several files
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    pub order_id: String,
    pub tracking_id: Option<String>,
    /// Stored paths, one per uploaded file
    pub files: Vec<String>,
}
