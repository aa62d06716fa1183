pub mod auth_handler;

pub use auth_handler::{__path_login, __path_seed_user, login, seed_user};
