//! Record repository - persistence for credentials, import records and
//! distribution orders.
//!
//! Services depend on the [`RecordRepository`] trait; production wires the
//! PostgreSQL implementation, tests use the in-memory one.

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::InMemoryRecordRepository;
pub use postgres::PgRecordRepository;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::Credential;
use crate::features::distributions::models::{
    CreateDistributionOrder, DistributionOrder, UpdateDistributionOrder,
};
use crate::features::imports::models::{CreateImportRecord, ImportRecord};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fails with `NotFound` when no credential exists for `username`
    async fn find_credential(&self, username: &str) -> Result<Credential>;

    /// Fails with `Conflict` when `username` is already taken
    async fn insert_credential(&self, username: &str, password_hash: &str) -> Result<Credential>;

    async fn list_import_records(&self) -> Result<Vec<ImportRecord>>;

    /// Inserts every record or none of them
    async fn insert_import_records(
        &self,
        records: Vec<CreateImportRecord>,
    ) -> Result<Vec<ImportRecord>>;

    /// Fails with `NotFound` when no order has this order number
    async fn find_distribution_order(&self, order_number: &str) -> Result<DistributionOrder>;

    async fn list_distribution_orders(&self) -> Result<Vec<DistributionOrder>>;

    /// Fails with `Conflict` when the order number is already used
    async fn insert_distribution_order(
        &self,
        order: CreateDistributionOrder,
    ) -> Result<DistributionOrder>;

    /// Fails with `NotFound` when no order has this order number
    async fn update_distribution_order(
        &self,
        order_number: &str,
        update: UpdateDistributionOrder,
    ) -> Result<DistributionOrder>;
}

fn credential_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn order_not_found() -> AppError {
    AppError::NotFound("Distribution order not found".to_string())
}

fn order_conflict(order_number: &str) -> AppError {
    AppError::Conflict(format!(
        "Distribution order '{}' already exists",
        order_number
    ))
}
