//! Drug import records.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/import` | List import records |
//! | POST | `/new_import` | Validate and echo an import payload (not persisted) |
//! | GET | `/seed1` | Insert the three demo import records |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ImportService;
