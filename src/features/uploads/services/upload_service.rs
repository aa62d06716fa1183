use std::sync::Arc;

use minijinja::{context, Environment};
use tracing::{debug, error, info};

use crate::core::error::{AppError, Result};
use crate::modules::storage::LocalDocumentStore;
use crate::shared::multipart::UploadedFile;

/// Namespace used when an upload names no order
pub const DEFAULT_NAMESPACE: &str = "default";

// The `.html` suffix turns on HTML auto-escaping
const UPLOAD_FORM_TEMPLATE: &str = "upload_form.html";

/// Service for ad-hoc document uploads and the upload page
pub struct UploadService {
    store: Arc<LocalDocumentStore>,
    templates: Environment<'static>,
}

impl UploadService {
    pub fn new(store: Arc<LocalDocumentStore>) -> Result<Self> {
        let mut templates = Environment::new();
        templates
            .add_template(
                UPLOAD_FORM_TEMPLATE,
                include_str!("../../../../templates/upload_form.html.jinja"),
            )
            .map_err(|e| AppError::Internal(format!("Failed to load upload form: {}", e)))?;

        Ok(Self { store, templates })
    }

    /// Store every file under `order_id` (or [`DEFAULT_NAMESPACE`]) and
    /// return the stored paths in upload order.
    pub async fn store_uploads(
        &self,
        order_id: Option<&str>,
        files: &[UploadedFile],
    ) -> Result<Vec<String>> {
        if files.is_empty() {
            error!("No files uploaded");
            return Err(AppError::BadRequest("No files uploaded".to_string()));
        }

        let namespace = order_id.unwrap_or(DEFAULT_NAMESPACE);
        let mut paths = Vec::with_capacity(files.len());
        for file in files {
            debug!(
                "Storing upload: name={}, content_type={}, size={}",
                file.file_name,
                file.content_type,
                file.data.len()
            );
            let path = self
                .store
                .store_file(namespace, &file.file_name, &file.data)
                .await?;
            paths.push(path.to_string_lossy().into_owned());
        }

        info!("Files uploaded: namespace={}, count={}", namespace, paths.len());
        Ok(paths)
    }

    /// Render the upload page for an order; values are HTML-escaped
    pub fn render_upload_form(&self, order_id: &str, tracking_id: &str) -> Result<String> {
        let template = self
            .templates
            .get_template(UPLOAD_FORM_TEMPLATE)
            .map_err(|e| AppError::Internal(format!("Upload form template missing: {}", e)))?;

        template
            .render(context! { order_id, tracking_id })
            .map_err(|e| AppError::Internal(format!("Failed to render upload form: {}", e)))
    }
}
