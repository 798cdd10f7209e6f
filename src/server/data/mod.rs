//! Database repository layer.
//!
//! Repositories execute SeaORM statements for each entity and return entity models to the
//! service layer. List queries share the builder in [`list`].

pub mod car;
pub mod list;
pub mod order;

#[cfg(test)]
mod test;
