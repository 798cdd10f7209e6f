//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let car = factory::create_car(&db).await?;
//! let order = factory::create_order(&db, car.car_id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db)
//!     .car_name("Toyota Avanza")
//!     .day_rate(250_000.0)
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod helpers;
pub mod order;

pub use car::create_car;
pub use helpers::create_order_with_car;
pub use order::create_order;
