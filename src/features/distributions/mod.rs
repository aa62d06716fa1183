//! Distribution orders and their attached documents.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/distribution` | List all orders |
//! | GET | `/distribution/{order_id}` | Get one order by order number |
//! | POST | `/distributionadd` | Place an order (JSON) |
//! | POST | `/distributionadd1` | Place an order with documents (multipart) |
//! | GET | `/files/{order_id}` | List files stored for an order |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::OrderService;
