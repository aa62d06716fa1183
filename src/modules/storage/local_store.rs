//! Local filesystem document store
//!
//! Layout: `{root}/{namespace}/{original_filename}`, where the namespace is the
//! percent-encoded order identifier. Writing a file whose name already exists
//! in the namespace replaces it.

use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::error::{AppError, Result};

/// Directory name for an order identifier, `None` when it is empty.
///
/// Separators, spaces and other reserved characters are percent-encoded; the
/// dot-only names `.` and `..` are encoded as well.
fn namespace_name(order_id: &str) -> Option<String> {
    if order_id.is_empty() {
        return None;
    }
    let encoded = urlencoding::encode(order_id);
    if encoded.chars().all(|c| c == '.') {
        return Some(encoded.replace('.', "%2E"));
    }
    Some(encoded.into_owned())
}

/// Reduce a client-supplied filename to its final path component.
///
/// Browsers may send full client paths (`C:\fakepath\a.pdf`), so both
/// separators are stripped.
pub fn sanitize_filename(original: &str) -> Result<String> {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if !is_safe_filename(name) {
        return Err(AppError::Validation(format!(
            "Invalid file name '{}'",
            original
        )));
    }
    Ok(name.to_string())
}

fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.chars().any(char::is_control)
}

fn no_files_found() -> AppError {
    AppError::NotFound("No files found for this order".to_string())
}

pub struct LocalDocumentStore {
    root: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the uploads root if missing
    pub async fn ensure_root_exists(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        info!("Document store root ready: {}", self.root.display());
        Ok(())
    }

    fn namespace_dir(&self, order_id: &str) -> Result<PathBuf> {
        let name = namespace_name(order_id).ok_or_else(|| {
            AppError::Validation(format!("Invalid order identifier '{}'", order_id))
        })?;
        Ok(self.root.join(name))
    }

    /// Write `data` under the order's namespace, creating it when needed.
    ///
    /// Returns the stored path, i.e. `{root}/{namespace}/{filename}`.
    pub async fn store_file(
        &self,
        order_id: &str,
        original_filename: &str,
        data: &[u8],
    ) -> Result<PathBuf> {
        let dir = self.namespace_dir(order_id)?;
        let filename = sanitize_filename(original_filename)?;

        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(&filename);
        tokio::fs::write(&path, data).await?;

        debug!(
            "Stored file: order_id={}, path={}, size={}",
            order_id,
            path.display(),
            data.len()
        );

        Ok(path)
    }

    /// Names of every entry in the order's namespace, in directory order.
    ///
    /// Fails with `NotFound` when nothing was ever uploaded for the order.
    pub async fn list_files(&self, order_id: &str) -> Result<Vec<String>> {
        let Some(name) = namespace_name(order_id) else {
            return Err(no_files_found());
        };
        let dir = self.root.join(name);

        let is_dir = match tokio::fs::metadata(&dir).await {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        if !is_dir {
            return Err(no_files_found());
        }

        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("COA.pdf").unwrap(), "COA.pdf");
        assert_eq!(
            sanitize_filename("C:\\fakepath\\Invoice.pdf").unwrap(),
            "Invoice.pdf"
        );
        assert_eq!(
            sanitize_filename("../../etc/Shipping Label.pdf").unwrap(),
            "Shipping Label.pdf"
        );
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("dir/").is_err());
        assert!(sanitize_filename("..").is_err());
    }

    #[tokio::test]
    async fn test_list_files_before_any_upload_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        let result = store.list_files("ORD001").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("uploads");
        let store = LocalDocumentStore::new(&root);

        let path = store.store_file("ORD001", "a.pdf", b"%PDF-1.4").await.unwrap();
        assert_eq!(path, root.join("ORD001").join("a.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");

        store.store_file("ORD001", "b.pdf", b"second").await.unwrap();

        let mut files = store.list_files("ORD001").await.unwrap();
        files.sort();
        assert_eq!(files, vec!["a.pdf".to_string(), "b.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        store.store_file("ORD001", "a.pdf", b"first").await.unwrap();
        let path = store.store_file("ORD001", "a.pdf", b"second").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"second");
        assert_eq!(store.list_files("ORD001").await.unwrap().len(), 1);
    }

    #[test]
    fn test_namespace_name() {
        assert_eq!(namespace_name("ORD001").as_deref(), Some("ORD001"));
        assert_eq!(namespace_name("ORD 001").as_deref(), Some("ORD%20001"));
        assert_eq!(namespace_name("a/b").as_deref(), Some("a%2Fb"));
        assert_eq!(namespace_name("a\\b").as_deref(), Some("a%5Cb"));
        assert_eq!(namespace_name(".").as_deref(), Some("%2E"));
        assert_eq!(namespace_name("..").as_deref(), Some("%2E%2E"));
        assert_eq!(namespace_name("..a").as_deref(), Some("..a"));
        assert_eq!(namespace_name(""), None);
    }

    #[tokio::test]
    async fn test_any_order_identifier_stays_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        for order_id in ["..", ".", "a/b", "../escape", "ORD 001"] {
            let path = store.store_file(order_id, "a.pdf", b"x").await.unwrap();
            assert_eq!(
                path.parent().and_then(|p| p.parent()),
                Some(dir.path()),
                "{:?} escaped the root",
                order_id
            );
            assert_eq!(store.list_files(order_id).await.unwrap(), vec!["a.pdf"]);
        }
    }

    #[tokio::test]
    async fn test_empty_order_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        let stored = store.store_file("", "a.pdf", b"x").await;
        assert!(matches!(stored, Err(AppError::Validation(_))));

        let listed = store.list_files("").await;
        assert!(matches!(listed, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unusual_identifier_without_upload_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalDocumentStore::new(dir.path());

        let result = store.list_files("ORD 001").await;
        assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == "No files found for this order"));
    }
}
