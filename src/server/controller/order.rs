use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseGeneralDto},
        list::ListRequestDto,
        order::{CreateOrderDto, OrderListDto, OrderResponseDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiQuery},
        model::{
            list::ListParams,
            order::{CreateOrderParams, UpdateOrderParams},
        },
        service::order::OrderService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

const ORDER_ID_FIELD: &str = "orders-id";

/// List orders.
///
/// Returns one page of orders with the booked car's name, optionally filtered by a
/// case-insensitive match on the pickup location. Defaults to sorting by `order_date`
/// descending.
///
/// # Returns
/// - `200 OK` - Page of orders with paging metadata
/// - `400 Bad Request` - Malformed query string, `invalid-page` or `invalid-limit`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    params(ListRequestDto),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = OrderListDto),
        (status = 400, description = "Malformed or out-of-range query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let page = service.get_paginated(ListParams::from_dto(params)).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get an order by ID.
///
/// # Returns
/// - `200 OK` - Order details including the car name
/// - `400 Bad Request` - `wrong-orders-id-type`
/// - `404 Not Found` - `orders-not-found`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderResponseDto),
        (status = 400, description = "Malformed order ID", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&id, ORDER_ID_FIELD)?;

    let service = OrderService::new(&state.db);

    let order = service.get_by_id(order_id).await?;

    Ok((StatusCode::OK, Json(order.into_response_dto())))
}

/// Create a new order.
///
/// All fields are required and dates must be `YYYY-MM-DD`. The car must exist and must not
/// have an order whose dropoff date is on or after the requested pickup date.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Order creation data
///
/// # Returns
/// - `200 OK` - Order created, body carries the new ID
/// - `400 Bad Request` - Validation code or `car-already-occupied`
/// - `404 Not Found` - `car-not-found`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Successfully created order", body = ResponseGeneralDto),
        (status = 400, description = "Invalid order data or car already occupied", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOrderParams::from_dto(payload)?;

    let service = OrderService::new(&state.db);

    let order_id = service.create(params).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(order_id))))
}

/// Update an order.
///
/// Only supplied fields are written. When both `car_id` and `pickup_date` are supplied the
/// availability check runs again.
///
/// # Returns
/// - `200 OK` - Update applied
/// - `400 Bad Request` - `wrong-orders-id-type`, field validation code or
///   `car-already-occupied`
/// - `404 Not Found` - `car-not-found`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = ResponseGeneralDto),
        (status = 400, description = "Invalid order data or malformed ID", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&id, ORDER_ID_FIELD)?;
    let params = UpdateOrderParams::from_dto(payload)?;

    let service = OrderService::new(&state.db);

    service.update(order_id, params).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(order_id))))
}

/// Delete an order.
///
/// # Returns
/// - `200 OK` - Order deleted or already absent
/// - `400 Bad Request` - `wrong-orders-id-type`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted order", body = ResponseGeneralDto),
        (status = 400, description = "Malformed order ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&id, ORDER_ID_FIELD)?;

    let service = OrderService::new(&state.db);

    service.delete(order_id).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(order_id))))
}
