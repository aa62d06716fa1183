use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::imports::models::CreateImportRecord;

/// Request DTO for an import record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateImportDto {
    #[validate(length(min = 1, message = "orderNo is required"))]
    pub order_no: String,
    #[validate(length(min = 1, message = "drugName is required"))]
    pub drug_name: String,
    #[validate(length(min = 1, message = "supplier is required"))]
    pub supplier: String,
    /// Free-form date as entered by the operator (e.g. "2025-01-10")
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "poNumber is required"))]
    pub po_number: String,
    #[validate(length(min = 1, message = "paymentMethod is required"))]
    pub payment_method: String,
    /// Document filenames
    #[serde(default)]
    pub documents: Vec<String>,
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

impl From<CreateImportDto> for CreateImportRecord {
    fn from(dto: CreateImportDto) -> Self {
        Self {
            order_no: dto.order_no,
            drug_name: dto.drug_name,
            supplier: dto.supplier,
            date: dto.date,
            po_number: dto.po_number,
            payment_method: dto.payment_method,
            documents: dto.documents,
            status: dto.status,
        }
    }
}
