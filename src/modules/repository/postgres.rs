use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{credential_not_found, order_conflict, order_not_found, RecordRepository};
use crate::core::error::{AppError, Result};
use crate::features::auth::models::Credential;
use crate::features::distributions::models::{
    Analysis, CreateDistributionOrder, DistributionOrder, DistributionStatus, GeoLocation,
    OrderDocument, ProductInfo, TimelineEvent, UpdateDistributionOrder,
};
use crate::features::imports::models::{CreateImportRecord, ImportRecord};

const ORDER_COLUMNS: &str = r#"
    id, order_number, tracking_number, customer_name, shipping_address,
    contact_phone, contact_email, status, order_date, product_info, analysis,
    delivery_timeline, documents, latitude, longitude, signature
"#;

const IMPORT_COLUMNS: &str = r#"
    id, order_no, drug_name, supplier, date, po_number, payment_method,
    documents, status, created_at
"#;

/// Row shape of `distribution_orders`; nested records live in JSONB columns
#[derive(Debug, FromRow)]
struct DistributionOrderRow {
    id: Uuid,
    order_number: String,
    tracking_number: String,
    customer_name: String,
    shipping_address: String,
    contact_phone: String,
    contact_email: String,
    status: DistributionStatus,
    order_date: DateTime<Utc>,
    product_info: Option<Json<ProductInfo>>,
    analysis: Option<Json<Analysis>>,
    delivery_timeline: Json<Vec<TimelineEvent>>,
    documents: Json<Vec<OrderDocument>>,
    latitude: f64,
    longitude: f64,
    signature: Option<String>,
}

impl From<DistributionOrderRow> for DistributionOrder {
    fn from(row: DistributionOrderRow) -> Self {
        Self {
            id: row.id,
            order_number: row.order_number,
            tracking_number: row.tracking_number,
            customer_name: row.customer_name,
            shipping_address: row.shipping_address,
            contact_phone: row.contact_phone,
            contact_email: row.contact_email,
            status: row.status,
            order_date: row.order_date,
            product_info: row.product_info.map(|j| j.0),
            analysis: row.analysis.map(|j| j.0),
            delivery_timeline: row.delivery_timeline.0,
            documents: row.documents.0,
            location: GeoLocation {
                latitude: row.latitude,
                longitude: row.longitude,
            },
            signature: row.signature,
        }
    }
}

/// Convert a unique violation (PostgreSQL 23505) into a conflict
fn handle_db_error(e: sqlx::Error, conflict: impl FnOnce() -> AppError) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return conflict();
        }
    }
    AppError::Database(e)
}

/// PostgreSQL-backed record repository
pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn find_credential(&self, username: &str) -> Result<Credential> {
        sqlx::query_as::<_, Credential>(
            r#"
            SELECT id, username, password_hash
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(credential_not_found)
    }

    async fn insert_credential(&self, username: &str, password_hash: &str) -> Result<Credential> {
        let credential = sqlx::query_as::<_, Credential>(
            r#"
            INSERT INTO credentials (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            handle_db_error(e, || {
                AppError::Conflict(format!("User '{}' already exists", username))
            })
        })?;

        tracing::info!("Credential created: username={}", credential.username);
        Ok(credential)
    }

    async fn list_import_records(&self) -> Result<Vec<ImportRecord>> {
        let records = sqlx::query_as::<_, ImportRecord>(&format!(
            "SELECT {} FROM import_records ORDER BY created_at, id",
            IMPORT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list import records: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(records)
    }

    async fn insert_import_records(
        &self,
        records: Vec<CreateImportRecord>,
    ) -> Result<Vec<ImportRecord>> {
        let sql = format!(
            r#"
            INSERT INTO import_records
                (id, order_no, drug_name, supplier, date, po_number, payment_method, documents, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            IMPORT_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(records.len());

        for record in records {
            let row = sqlx::query_as::<_, ImportRecord>(&sql)
                .bind(Uuid::now_v7())
                .bind(record.order_no)
                .bind(record.drug_name)
                .bind(record.supplier)
                .bind(record.date)
                .bind(record.po_number)
                .bind(record.payment_method)
                .bind(record.documents)
                .bind(record.status)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
        }

        tx.commit().await?;

        tracing::info!("Inserted {} import records", inserted.len());
        Ok(inserted)
    }

    async fn find_distribution_order(&self, order_number: &str) -> Result<DistributionOrder> {
        let row = sqlx::query_as::<_, DistributionOrderRow>(&format!(
            "SELECT {} FROM distribution_orders WHERE order_number = $1",
            ORDER_COLUMNS
        ))
        .bind(order_number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into).ok_or_else(order_not_found)
    }

    async fn list_distribution_orders(&self) -> Result<Vec<DistributionOrder>> {
        let rows = sqlx::query_as::<_, DistributionOrderRow>(&format!(
            "SELECT {} FROM distribution_orders ORDER BY order_date DESC, id",
            ORDER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list distribution orders: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_distribution_order(
        &self,
        order: CreateDistributionOrder,
    ) -> Result<DistributionOrder> {
        let row = sqlx::query_as::<_, DistributionOrderRow>(&format!(
            r#"
            INSERT INTO distribution_orders (
                id, order_number, tracking_number, customer_name, shipping_address,
                contact_phone, contact_email, status, order_date, product_info, analysis,
                delivery_timeline, documents, latitude, longitude, signature
            ) VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16
            )
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(Uuid::now_v7())
        .bind(&order.order_number)
        .bind(order.tracking_number)
        .bind(order.customer_name)
        .bind(order.shipping_address)
        .bind(order.contact_phone)
        .bind(order.contact_email)
        .bind(order.status)
        .bind(order.order_date)
        .bind(order.product_info.map(Json))
        .bind(order.analysis.map(Json))
        .bind(Json(order.delivery_timeline))
        .bind(Json(order.documents))
        .bind(order.location.latitude)
        .bind(order.location.longitude)
        .bind(order.signature)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, || order_conflict(&order.order_number)))?;

        tracing::info!(
            "Distribution order created: id={}, order_number={}",
            row.id,
            row.order_number
        );

        Ok(row.into())
    }

    async fn update_distribution_order(
        &self,
        order_number: &str,
        update: UpdateDistributionOrder,
    ) -> Result<DistributionOrder> {
        let row = sqlx::query_as::<_, DistributionOrderRow>(&format!(
            r#"
            UPDATE distribution_orders
            SET documents = COALESCE($2, documents), updated_at = NOW()
            WHERE order_number = $1
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(order_number)
        .bind(update.documents.map(Json))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Into::into).ok_or_else(order_not_found)
    }
}
