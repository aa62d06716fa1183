use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::distributions::{
    dtos as distributions_dtos, handlers as distributions_handlers,
    models as distributions_models,
};
use crate::features::imports::{
    dtos as imports_dtos, handlers as imports_handlers, models as imports_models,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        auth_handlers::seed_user,
        // Imports
        imports_handlers::list_imports,
        imports_handlers::new_import,
        imports_handlers::seed_imports,
        // Distributions
        distributions_handlers::get_distribution,
        distributions_handlers::list_distributions,
        distributions_handlers::place_order,
        distributions_handlers::place_order_with_documents,
        distributions_handlers::list_order_files,
        // Uploads
        uploads_handlers::upload_files,
        uploads_handlers::upload_form,
    ),
    components(
        schemas(
            // Auth
            auth_dtos::LoginRequestDto,
            // Imports
            imports_models::ImportRecord,
            imports_dtos::CreateImportDto,
            ApiResponse<Vec<imports_models::ImportRecord>>,
            ApiResponse<imports_dtos::CreateImportDto>,
            // Distributions
            distributions_models::DistributionOrder,
            distributions_models::DistributionStatus,
            distributions_models::DocumentStatus,
            distributions_models::ProductInfo,
            distributions_models::Dimensions,
            distributions_models::Analysis,
            distributions_models::TimelineEvent,
            distributions_models::OrderDocument,
            distributions_models::GeoLocation,
            distributions_dtos::CreateDistributionOrderDto,
            distributions_dtos::PlaceOrderWithDocumentsDto,
            distributions_dtos::PlaceOrderResponseDto,
            distributions_dtos::FileListDto,
            ApiResponse<distributions_models::DistributionOrder>,
            ApiResponse<Vec<distributions_models::DistributionOrder>>,
            ApiResponse<distributions_dtos::PlaceOrderResponseDto>,
            ApiResponse<distributions_dtos::FileListDto>,
            // Uploads
            uploads_dtos::UploadFilesDto,
            uploads_dtos::UploadResponseDto,
            ApiResponse<uploads_dtos::UploadResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Dashboard login"),
        (name = "imports", description = "Drug import records"),
        (name = "distributions", description = "Distribution orders and their documents"),
        (name = "uploads", description = "Document uploads keyed by order"),
    ),
    info(
        title = "Pharma Logistics API",
        version = "0.1.0",
        description = "API documentation for the pharma import and distribution backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
