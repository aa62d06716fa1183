use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::distributions::dtos::CreateDistributionOrderDto;
use crate::features::distributions::models::{
    DistributionOrder, OrderDocument, UpdateDistributionOrder,
};
use crate::modules::repository::RecordRepository;
use crate::modules::storage::{sanitize_filename, LocalDocumentStore};
use crate::shared::multipart::UploadedFile;
use crate::shared::validation::format_validation_errors;

/// Service for the distribution order lifecycle
pub struct OrderService {
    repo: Arc<dyn RecordRepository>,
    store: Arc<LocalDocumentStore>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn RecordRepository>, store: Arc<LocalDocumentStore>) -> Self {
        Self { repo, store }
    }

    /// Validate, apply defaults and insert a new order
    pub async fn place_order(&self, dto: CreateDistributionOrderDto) -> Result<DistributionOrder> {
        dto.validate()
            .map_err(|e| AppError::Validation(format_validation_errors(&e)))?;

        let order = self
            .repo
            .insert_distribution_order(dto.into_create(Utc::now()))
            .await?;

        info!(
            "Distribution order placed: order_number={}, id={}",
            order.order_number, order.id
        );
        Ok(order)
    }

    /// Place an order, then store `files` under its order number and replace
    /// its documents with one pending entry per stored file.
    ///
    /// Filenames are checked before the insert, so a rejected request writes
    /// nothing. The two writes are not atomic: when an I/O failure hits while
    /// storing, the order stays without documents.
    pub async fn place_order_with_documents(
        &self,
        dto: CreateDistributionOrderDto,
        files: Vec<UploadedFile>,
    ) -> Result<DistributionOrder> {
        for file in &files {
            sanitize_filename(&file.file_name)?;
        }

        let order = self.place_order(dto).await?;
        if files.is_empty() {
            return Ok(order);
        }

        let mut documents = Vec::with_capacity(files.len());
        for file in &files {
            let path = self
                .store
                .store_file(&order.order_number, &file.file_name, &file.data)
                .await
                .inspect_err(|e| {
                    warn!(
                        "Storing documents failed after order insert: order_number={}, error={}",
                        order.order_number, e
                    )
                })?;
            documents.push(OrderDocument::pending(stored_title(&path)));
        }

        let order = self
            .repo
            .update_distribution_order(
                &order.order_number,
                UpdateDistributionOrder::documents(documents),
            )
            .await?;

        info!(
            "Documents attached: order_number={}, count={}",
            order.order_number,
            order.documents.len()
        );
        Ok(order)
    }

    pub async fn get_order(&self, order_number: &str) -> Result<DistributionOrder> {
        self.repo.find_distribution_order(order_number).await
    }

    pub async fn list_orders(&self) -> Result<Vec<DistributionOrder>> {
        self.repo.list_distribution_orders().await
    }

    pub async fn list_order_files(&self, order_number: &str) -> Result<Vec<String>> {
        self.store.list_files(order_number).await
    }
}

fn stored_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
