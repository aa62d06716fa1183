pub mod order_handler;

pub use order_handler::{
    __path_get_distribution, __path_list_distributions, __path_list_order_files,
    __path_place_order, __path_place_order_with_documents, get_distribution, list_distributions,
    list_order_files, place_order, place_order_with_documents,
};
