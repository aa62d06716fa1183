pub mod import_handler;

pub use import_handler::{
    __path_list_imports, __path_new_import, __path_seed_imports, list_imports, new_import,
    seed_imports,
};
