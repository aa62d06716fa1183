//! Credential verification for the dashboard login.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/login` | Verify username and password |
//! | GET | `/seed` | Create the demo credential |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod services;

pub use services::AuthService;
