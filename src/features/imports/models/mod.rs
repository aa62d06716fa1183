mod import_record;

pub use import_record::{CreateImportRecord, ImportRecord};
