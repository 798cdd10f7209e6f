//! Wire DTOs shared by the HTTP layer.
//!
//! These types define the JSON shapes of requests and responses. They carry no behavior
//! beyond serialization; conversion to and from domain models lives in `server::model`.

pub mod api;
pub mod car;
pub mod list;
pub mod order;
