//! HTTP request handlers.
//!
//! Controllers bind path, query and body extractors, convert DTOs into parameters, call the
//! service layer and convert results back into DTOs.

pub mod car;
pub mod docs;
pub mod health;
pub mod order;
