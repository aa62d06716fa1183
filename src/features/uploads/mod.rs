//! Document uploads keyed by order, and the QR-code upload page.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/upload` | Store files under an order's namespace |
//! | GET | `/upload/{order_id}/{tracking_id}` | HTML upload form for an order |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::UploadService;
