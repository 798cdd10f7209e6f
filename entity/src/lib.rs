//! SeaORM entity models for the rental database.
//!
//! One module per table. Entities are re-exported under short names from
//! [`prelude`] for use in queries and test table builders.

pub mod prelude;

pub mod car;
pub mod order;
