//! Storage module for uploaded order documents
//!
//! Files live on the local filesystem, one namespace directory per order
//! identifier (percent-encoded). The directory listing is the only index of
//! what was uploaded.

mod local_store;

pub use local_store::{sanitize_filename, LocalDocumentStore};
