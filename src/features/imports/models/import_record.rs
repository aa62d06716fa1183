use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for a drug import record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub id: Uuid,
    pub order_no: String,
    pub drug_name: String,
    pub supplier: String,
    pub date: String,
    pub po_number: String,
    pub payment_method: String,
    /// Attached document filenames, in submission order
    pub documents: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new import record
#[derive(Debug, Clone)]
pub struct CreateImportRecord {
    pub order_no: String,
    pub drug_name: String,
    pub supplier: String,
    pub date: String,
    pub po_number: String,
    pub payment_method: String,
    pub documents: Vec<String>,
    pub status: String,
}

impl CreateImportRecord {
    pub fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> ImportRecord {
        ImportRecord {
            id,
            order_no: self.order_no,
            drug_name: self.drug_name,
            supplier: self.supplier,
            date: self.date,
            po_number: self.po_number,
            payment_method: self.payment_method,
            documents: self.documents,
            status: self.status,
            created_at,
        }
    }
}
