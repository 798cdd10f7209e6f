//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules such as car availability and
//! convert entity models into domain models for the controllers.

pub mod car;
pub mod order;

#[cfg(test)]
mod test;
