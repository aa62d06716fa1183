use axum::body::Bytes;
use axum::extract::Multipart;
use std::collections::HashMap;
use tracing::debug;

use crate::core::error::{AppError, Result};

/// One file part of a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// A fully buffered multipart form: file parts of one field plus text fields
#[derive(Debug, Default)]
pub struct UploadForm {
    pub files: Vec<UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Drain `multipart`, collecting parts named `file_field` as files and
    /// every other part as text.
    ///
    /// File parts without a filename are skipped; browsers send one for an
    /// empty `<input type="file">`.
    pub async fn read(multipart: &mut Multipart, file_field: &str) -> Result<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            debug!("Failed to read multipart field: {}", e);
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let field_name = field.name().unwrap_or("").to_string();

            if field_name == file_field {
                let file_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                if file_name.is_empty() {
                    debug!("Skipping {} part without filename", file_field);
                    continue;
                }

                form.files.push(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            } else {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read field '{}': {}", field_name, e))
                })?;
                form.fields.insert(field_name, text);
            }
        }

        Ok(form)
    }

    /// Text field value, `None` when absent or blank
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}
