mod import_service;

pub use import_service::{demo_import_records, ImportService};
