use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ResponseGeneralDto},
        car::{CarDto, CarListDto, CarResponseDto, CreateCarDto, UpdateCarDto},
        order::{
            CreateOrderDto, OrderDto, OrderListDto, OrderResponseDto, UpdateOrderDto,
        },
    },
    server::controller::{car, health, order},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Rental API", description = "Cars and rental orders"),
    paths(
        health::health,
        car::list_cars,
        car::get_car,
        car::create_car,
        car::update_car,
        car::delete_car,
        order::list_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::delete_order,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ResponseGeneralDto,
        CarDto,
        CarListDto,
        CarResponseDto,
        CreateCarDto,
        UpdateCarDto,
        OrderDto,
        OrderListDto,
        OrderResponseDto,
        CreateOrderDto,
        UpdateOrderDto,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "cars", description = "Car listings"),
        (name = "orders", description = "Rental orders"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document as JSON.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
