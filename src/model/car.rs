use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    #[serde(rename = "id")]
    pub car_id: i32,
    pub car_name: String,
    pub day_rate: f64,
    pub month_rate: f64,
    pub image: String,
}

/// Request body for creating a car.
///
/// Omitted fields deserialize to their zero value and are rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCarDto {
    #[serde(default)]
    pub car_name: String,
    #[serde(default)]
    pub day_rate: f64,
    #[serde(default)]
    pub month_rate: f64,
    #[serde(default)]
    pub image: String,
}

/// Request body for a partial car update.
///
/// Only non-empty strings and non-zero rates are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCarDto {
    #[serde(default)]
    pub car_name: String,
    #[serde(default)]
    pub day_rate: f64,
    #[serde(default)]
    pub month_rate: f64,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarResponseDto {
    pub message: String,
    pub item: CarDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarListDto {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub order: String,
    pub order_by: String,
    pub items: Vec<CarDto>,
    pub message: String,
}
