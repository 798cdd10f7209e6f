pub use super::car::Entity as Car;
pub use super::order::Entity as Order;
