use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{credential_not_found, order_conflict, order_not_found, RecordRepository};
use crate::core::error::{AppError, Result};
use crate::features::auth::models::Credential;
use crate::features::distributions::models::{
    CreateDistributionOrder, DistributionOrder, UpdateDistributionOrder,
};
use crate::features::imports::models::{CreateImportRecord, ImportRecord};

#[derive(Default)]
struct Collections {
    credentials: Vec<Credential>,
    imports: Vec<ImportRecord>,
    orders: Vec<DistributionOrder>,
}

/// Process-local repository used by tests
#[derive(Default)]
pub struct InMemoryRecordRepository {
    inner: RwLock<Collections>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn find_credential(&self, username: &str) -> Result<Credential> {
        let inner = self.inner.read().await;
        inner
            .credentials
            .iter()
            .find(|c| c.username == username)
            .cloned()
            .ok_or_else(credential_not_found)
    }

    async fn insert_credential(&self, username: &str, password_hash: &str) -> Result<Credential> {
        let mut inner = self.inner.write().await;
        if inner.credentials.iter().any(|c| c.username == username) {
            return Err(AppError::Conflict(format!(
                "User '{}' already exists",
                username
            )));
        }

        let credential = Credential {
            id: Uuid::now_v7(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        inner.credentials.push(credential.clone());
        Ok(credential)
    }

    async fn list_import_records(&self) -> Result<Vec<ImportRecord>> {
        Ok(self.inner.read().await.imports.clone())
    }

    async fn insert_import_records(
        &self,
        records: Vec<CreateImportRecord>,
    ) -> Result<Vec<ImportRecord>> {
        let now = Utc::now();
        let inserted: Vec<ImportRecord> = records
            .into_iter()
            .map(|r| r.into_record(Uuid::now_v7(), now))
            .collect();

        self.inner
            .write()
            .await
            .imports
            .extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn find_distribution_order(&self, order_number: &str) -> Result<DistributionOrder> {
        let inner = self.inner.read().await;
        inner
            .orders
            .iter()
            .find(|o| o.order_number == order_number)
            .cloned()
            .ok_or_else(order_not_found)
    }

    async fn list_distribution_orders(&self) -> Result<Vec<DistributionOrder>> {
        Ok(self.inner.read().await.orders.clone())
    }

    async fn insert_distribution_order(
        &self,
        order: CreateDistributionOrder,
    ) -> Result<DistributionOrder> {
        let mut inner = self.inner.write().await;
        if inner
            .orders
            .iter()
            .any(|o| o.order_number == order.order_number)
        {
            return Err(order_conflict(&order.order_number));
        }

        let order = order.into_order(Uuid::now_v7());
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn update_distribution_order(
        &self,
        order_number: &str,
        update: UpdateDistributionOrder,
    ) -> Result<DistributionOrder> {
        let mut inner = self.inner.write().await;
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.order_number == order_number)
            .ok_or_else(order_not_found)?;

        update.apply(order);
        Ok(order.clone())
    }
}
