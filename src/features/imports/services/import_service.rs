use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::imports::dtos::CreateImportDto;
use crate::features::imports::models::ImportRecord;
use crate::modules::repository::RecordRepository;
use crate::shared::validation::format_validation_errors;

/// The demo dataset inserted by `/seed1`
pub fn demo_import_records() -> Vec<CreateImportDto> {
    let docs = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        CreateImportDto {
            order_no: "ORD001".to_string(),
            drug_name: "Paracetamol".to_string(),
            supplier: "PharmaCorp".to_string(),
            date: "2025-01-10".to_string(),
            po_number: "PO12345".to_string(),
            payment_method: "Credit".to_string(),
            documents: docs(&["COA.pdf", "Invoice.pdf"]),
            status: "Shipped".to_string(),
        },
        CreateImportDto {
            order_no: "ORD002".to_string(),
            drug_name: "Ibuprofen".to_string(),
            supplier: "HealthCare Supplies".to_string(),
            date: "2025-01-12".to_string(),
            po_number: "PO12346".to_string(),
            payment_method: "Bank Transfer".to_string(),
            documents: docs(&["COA.pdf", "Invoice.pdf"]),
            status: "In Customs".to_string(),
        },
        CreateImportDto {
            order_no: "ORD003".to_string(),
            drug_name: "Amoxicillin".to_string(),
            supplier: "MedLife Ltd".to_string(),
            date: "2025-01-15".to_string(),
            po_number: "PO12347".to_string(),
            payment_method: "Cash".to_string(),
            documents: docs(&["COA.pdf", "Invoice.pdf", "Shipping Label.pdf"]),
            status: "Delivered".to_string(),
        },
    ]
}

/// Service for drug import records
pub struct ImportService {
    repo: Arc<dyn RecordRepository>,
}

impl ImportService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<ImportRecord>> {
        self.repo.list_import_records().await
    }

    /// Validate every record first, then insert them all in one batch
    pub async fn create_many(&self, dtos: Vec<CreateImportDto>) -> Result<Vec<ImportRecord>> {
        for (index, dto) in dtos.iter().enumerate() {
            dto.validate().map_err(|e| {
                AppError::Validation(format!(
                    "Import record {}: {}",
                    index,
                    format_validation_errors(&e)
                ))
            })?;
        }

        let records = self
            .repo
            .insert_import_records(dtos.into_iter().map(Into::into).collect())
            .await?;

        info!("Import records created: count={}", records.len());
        Ok(records)
    }

    pub async fn seed_demo(&self) -> Result<Vec<ImportRecord>> {
        self.create_many(demo_import_records()).await
    }

    /// Validate an import payload and hand it back unchanged; nothing is stored
    pub fn echo(&self, dto: CreateImportDto) -> Result<CreateImportDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;
        Ok(dto)
    }
}
