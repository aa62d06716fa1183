//! Modules layer - Infrastructure components for persistence
//!
//! Contains the record repository (database) and the document store (filesystem).

pub mod repository;
pub mod storage;
