use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    #[serde(rename = "id")]
    pub order_id: i32,
    pub car_id: i32,
    pub car_name: String,
    pub order_date: NaiveDate,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    pub pickup_location: String,
    pub dropoff_location: String,
}

/// Car reference as sent by clients, either a JSON number or a numeric string.
///
/// Anything else is kept as `Other` so validation can report `wrong-car-id-type`
/// instead of failing the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarIdInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

/// Request body for creating an order.
///
/// Dates are `YYYY-MM-DD` strings and are parsed during validation so that malformed values
/// produce `failed-parsing-*` codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1")]
    pub car_id: Option<CarIdInput>,
    #[serde(default)]
    #[schema(example = "2024-03-01")]
    pub order_date: String,
    #[serde(default)]
    #[schema(example = "2024-03-02")]
    pub pickup_date: String,
    #[serde(default)]
    #[schema(example = "2024-03-05")]
    pub dropoff_date: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
}

/// Request body for a partial order update.
///
/// Empty strings and a missing car id leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderDto {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1")]
    pub car_id: Option<CarIdInput>,
    #[serde(default)]
    pub order_date: String,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub dropoff_date: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponseDto {
    pub message: String,
    pub item: OrderDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderListDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub order: String,
    pub order_by: String,
    pub items: Vec<OrderDto>,
    pub message: String,
}
