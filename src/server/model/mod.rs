//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types, and controllers convert
//! them into wire DTOs. Parameter types are built from request DTOs, which is where request
//! validation happens.

pub mod car;
pub mod list;
pub mod order;
