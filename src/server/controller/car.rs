use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseGeneralDto},
        car::{CarListDto, CarResponseDto, CreateCarDto, UpdateCarDto},
        list::ListRequestDto,
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiQuery},
        model::{
            car::{CreateCarParams, UpdateCarParams},
            list::ListParams,
        },
        service::car::CarService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "cars";

const CAR_ID_FIELD: &str = "cars-id";

/// List cars.
///
/// Returns one page of cars, optionally filtered by a case-insensitive match on the car
/// name. Defaults to sorting by `car_name` ascending.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Paging, sorting and search parameters
///
/// # Returns
/// - `200 OK` - Page of cars with paging metadata
/// - `400 Bad Request` - Malformed query string, `invalid-page` or `invalid-limit`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/cars",
    tag = CAR_TAG,
    params(ListRequestDto),
    responses(
        (status = 200, description = "Successfully retrieved cars", body = CarListDto),
        (status = 400, description = "Malformed or out-of-range query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let page = service.get_paginated(ListParams::from_dto(params)).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a car by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car ID from the path, must be an integer
///
/// # Returns
/// - `200 OK` - Car details
/// - `400 Bad Request` - `wrong-cars-id-type`
/// - `404 Not Found` - `cars-not-found`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved car", body = CarResponseDto),
        (status = 400, description = "Malformed car ID", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car_id = parse_id(&id, CAR_ID_FIELD)?;

    let service = CarService::new(&state.db);

    let car = service.get_by_id(car_id).await?;

    Ok((StatusCode::OK, Json(car.into_response_dto())))
}

/// Create a new car.
///
/// Requires a name, non-zero day and month rates, and an image reference.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Car creation data
///
/// # Returns
/// - `200 OK` - Car created, body carries the new ID
/// - `400 Bad Request` - `missing-*` or `invalid-*` validation code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 200, description = "Successfully created car", body = ResponseGeneralDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCarParams::from_dto(payload)?;

    let service = CarService::new(&state.db);

    let car_id = service.create(params).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(car_id))))
}

/// Update a car.
///
/// Only non-empty strings and non-zero rates are written. Updating a car that does not
/// exist succeeds without changes.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Car ID from the path, must be an integer
/// - `payload` - Fields to update
///
/// # Returns
/// - `200 OK` - Update applied
/// - `400 Bad Request` - `wrong-cars-id-type` or `invalid-*`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = ResponseGeneralDto),
        (status = 400, description = "Invalid car data or malformed ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car_id = parse_id(&id, CAR_ID_FIELD)?;
    let params = UpdateCarParams::from_dto(payload)?;

    let service = CarService::new(&state.db);

    service.update(car_id, params).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(car_id))))
}

/// Delete a car.
///
/// Orders referencing the car are removed by the foreign key cascade. Deleting a car that
/// does not exist succeeds.
///
/// # Returns
/// - `200 OK` - Car deleted or already absent
/// - `400 Bad Request` - `wrong-cars-id-type`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted car", body = ResponseGeneralDto),
        (status = 400, description = "Malformed car ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let car_id = parse_id(&id, CAR_ID_FIELD)?;

    let service = CarService::new(&state.db);

    service.delete(car_id).await?;

    Ok((StatusCode::OK, Json(ResponseGeneralDto::success(car_id))))
}
