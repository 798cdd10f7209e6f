//! Car Rental Test Utils
//!
//! Shared testing utilities for the car rental API. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, plus factories for inserting cars and
//! orders with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Builders for inserting test rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_cars() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let car = factory::create_car(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
