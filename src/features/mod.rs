pub mod auth;
pub mod distributions;
pub mod imports;
pub mod uploads;
